// crates/rule-logic/src/lib.rs
// ============================================================================
// Module: Rule Root
// Description: Public API surface for the rule subsystem.
// Purpose: Wire together the core modules, re-exports, and the DSL macro.
// Dependencies: crate::{rule, traits}
// ============================================================================

//! ## Overview
//! This crate provides a composable Boolean algebra over typed predicates.
//! The logical operators (`And`, `Or`, `Not`) are universal and
//! domain-agnostic, while the `Predicate` leaf is the boundary where
//! domain-specific semantics are injected through [`PredicateEval`].

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod rule;
pub mod traits;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use rule::Rule;
pub use traits::PredicateEval;

// ============================================================================
// SECTION: Convenience DSL
// ============================================================================

/// Convenience functions for creating rules without builders
pub mod convenience {
    use super::Rule;

    /// Creates a rule requiring all of the given rules
    #[must_use]
    pub fn all<P>(rules: Vec<Rule<P>>) -> Rule<P> {
        Rule::and(rules)
    }

    /// Creates a rule requiring any of the given rules
    #[must_use]
    pub fn any<P>(rules: Vec<Rule<P>>) -> Rule<P> {
        Rule::or(rules)
    }

    /// Creates a rule that inverts another rule
    #[must_use]
    pub fn not<P>(rule: Rule<P>) -> Rule<P> {
        Rule::negate(rule)
    }

    /// Creates a rule from a predicate
    #[must_use]
    pub const fn predicate<P>(predicate: P) -> Rule<P> {
        Rule::predicate(predicate)
    }
}

// ============================================================================
// SECTION: Rule Macro
// ============================================================================

/// Macro for ergonomic rule construction
///
/// This macro provides a DSL-like syntax for building rules. Children of
/// `and`/`or` lists are parenthesized so nested forms stay unambiguous:
///
/// ```ignore
/// let rule = rule! {
///     and [
///         (predicate(my_predicate)),
///         (or [
///             (predicate(other_predicate)),
///             (not(predicate(third_predicate)))
///         ])
///     ]
/// };
/// ```
#[macro_export]
macro_rules! rule {
    // Base case: predicate
    (predicate($pred:expr)) => {
        $crate::rule::Rule::predicate($pred)
    };

    // Not case
    (not($($inner:tt)+)) => {
        $crate::rule::Rule::negate($crate::rule!($($inner)+))
    };

    // And case
    (and [$(($($child:tt)+)),* $(,)?]) => {
        $crate::rule::Rule::and(vec![$($crate::rule!($($child)+)),*])
    };

    // Or case
    (or [$(($($child:tt)+)),* $(,)?]) => {
        $crate::rule::Rule::or(vec![$($crate::rule!($($child)+)),*])
    };
}
