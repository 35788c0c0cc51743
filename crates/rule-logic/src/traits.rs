// crates/rule-logic/src/traits.rs
// ============================================================================
// Module: Rule Evaluation Traits
// Description: Domain hand-off contract for predicate leaves.
// Purpose: Define how `Rule` trees consult domain-specific evaluation state.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Rule trees are domain-agnostic; this module defines the trait boundary
//! where a domain supplies the evaluation context consulted by predicate
//! leaves. Implementations must be deterministic: the same predicate and the
//! same context must always yield the same result.

// ============================================================================
// SECTION: Predicate Evaluation
// ============================================================================

/// Evaluation contract for domain-specific predicate leaves.
///
/// The context is borrowed for the duration of a single tree walk; rule
/// evaluation never mutates it.
pub trait PredicateEval {
    /// Snapshot of domain state consulted when evaluating a predicate leaf.
    type Context<'a>;

    /// Evaluates this predicate against the supplied context.
    fn eval_predicate(&self, ctx: &Self::Context<'_>) -> bool;
}
