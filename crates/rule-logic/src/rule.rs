// crates/rule-logic/src/rule.rs
// ============================================================================
// Module: Rule Core Types
// Description: Universal Boolean algebra over typed predicates.
// Purpose: Define the `Rule` tree structure along with constructor and
//          evaluation helpers.
// Dependencies: serde::{Deserialize, Serialize}, smallvec::SmallVec
// ============================================================================

//! ## Overview
//! This module defines the core rule structure and the logical operators
//! that power the universal predicate algebra while preserving short-circuit
//! evaluation guarantees.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

use crate::traits::PredicateEval;

// ============================================================================
// SECTION: Rule Definition
// ============================================================================

/// Universal rule tree with domain-specific leaves
///
/// This enum represents the core of the rule system - a composable Boolean
/// algebra that works over any domain-specific predicate type. The logical
/// operators (And, Or, Not) are universal and domain-agnostic, while the
/// Predicate variant serves as the boundary where domain-specific semantics
/// are injected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule<P> {
    /// Logical AND: All sub-rules must be satisfied
    ///
    /// Evaluation short-circuits on the first failure. Empty And is
    /// trivially satisfied (mathematical identity).
    And(SmallVec<[Box<Self>; 4]>),

    /// Logical OR: At least one sub-rule must be satisfied
    ///
    /// Evaluation short-circuits on the first success. Empty Or is
    /// trivially unsatisfiable (no options available).
    Or(SmallVec<[Box<Self>; 4]>),

    /// Logical NOT: Inverts the result of the sub-rule
    ///
    /// Boxed to keep the enum size manageable since Not is less common.
    Not(Box<Self>),

    /// Domain-specific atomic predicate
    ///
    /// This is the boundary where universal logic hands off to
    /// domain-specific evaluation.
    Predicate(P),
}

// ============================================================================
// SECTION: Execution Helpers
// ============================================================================

impl<P> Rule<P> {
    /// Evaluates this rule with aggressive short-circuiting
    ///
    /// This method implements the universal Boolean logic with optimal
    /// control flow. The actual predicate evaluation is delegated to the
    /// domain through the [`PredicateEval`] trait.
    pub fn eval(&self, ctx: &P::Context<'_>) -> bool
    where
        P: PredicateEval,
    {
        match self {
            // Delegate to domain-specific predicate evaluation
            Self::Predicate(predicate) => predicate.eval_predicate(ctx),

            // Simple negation
            Self::Not(rule) => !rule.eval(ctx),

            // Short-circuit AND: exit on first failure
            Self::And(rules) => {
                for rule in rules {
                    if !rule.eval(ctx) {
                        return false;
                    }
                }
                true
            }

            // Short-circuit OR: exit on first success
            Self::Or(rules) => {
                for rule in rules {
                    if rule.eval(ctx) {
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Determines if this rule is trivially satisfied
    pub fn is_trivially_satisfied(&self) -> bool {
        match self {
            // Empty And is trivially satisfied (mathematical identity)
            Self::And(rules) if rules.is_empty() => true,

            // And is satisfied if all sub-rules are trivially satisfied
            Self::And(rules) => rules.iter().all(|r| r.is_trivially_satisfied()),

            // Or is satisfied if any sub-rule is trivially satisfied
            Self::Or(rules) => rules.iter().any(|r| r.is_trivially_satisfied()),

            // Not is satisfied if the sub-rule is trivially unsatisfiable
            Self::Not(rule) => rule.is_trivially_unsatisfiable(),

            // Predicates require domain-specific analysis
            Self::Predicate(_) => false,
        }
    }

    /// Determines if this rule is trivially unsatisfiable
    pub fn is_trivially_unsatisfiable(&self) -> bool {
        match self {
            // Empty Or is trivially unsatisfiable (no options)
            Self::Or(rules) if rules.is_empty() => true,

            // And is unsatisfiable if any sub-rule is trivially unsatisfiable
            Self::And(rules) => rules.iter().any(|r| r.is_trivially_unsatisfiable()),

            // Or is unsatisfiable if all sub-rules are trivially unsatisfiable
            Self::Or(rules) => rules.iter().all(|r| r.is_trivially_unsatisfiable()),

            // Not is unsatisfiable if the sub-rule is trivially satisfied
            Self::Not(rule) => rule.is_trivially_satisfied(),

            // Predicates require domain-specific analysis
            Self::Predicate(_) => false,
        }
    }

    /// Returns the complexity of this rule tree
    pub fn complexity(&self) -> usize {
        match self {
            Self::Predicate(_) => 1,
            Self::Not(rule) => 1 + rule.complexity(),
            Self::And(rules) | Self::Or(rules) => {
                1 + rules.iter().map(|r| r.complexity()).sum::<usize>()
            }
        }
    }

    /// Returns every predicate leaf in this rule tree, in evaluation order
    pub fn predicates(&self) -> Vec<&P> {
        let mut out = Vec::new();
        self.collect_predicates(&mut out);
        out
    }

    /// Accumulates predicate leaves depth-first into `out`.
    fn collect_predicates<'a>(&'a self, out: &mut Vec<&'a P>) {
        match self {
            Self::Predicate(predicate) => out.push(predicate),
            Self::Not(rule) => rule.collect_predicates(out),
            Self::And(rules) | Self::Or(rules) => {
                for rule in rules {
                    rule.collect_predicates(out);
                }
            }
        }
    }
}

// ============================================================================
// SECTION: Constructor Helpers
// ============================================================================

impl<P> Rule<P> {
    /// Creates a logical AND of the given rules
    pub fn and(rules: Vec<Self>) -> Self {
        Self::And(rules.into_iter().map(Box::new).collect())
    }

    /// Creates a logical OR of the given rules
    pub fn or(rules: Vec<Self>) -> Self {
        Self::Or(rules.into_iter().map(Box::new).collect())
    }

    /// Creates a logical NOT of the given rule
    pub fn negate(rule: Self) -> Self {
        Self::Not(Box::new(rule))
    }

    /// Creates a rule from a predicate
    pub const fn predicate(predicate: P) -> Self {
        Self::Predicate(predicate)
    }

    /// Creates a rule that is always satisfied (empty And)
    #[must_use]
    pub const fn always() -> Self {
        Self::And(SmallVec::new_const())
    }

    /// Creates a rule that is never satisfied (empty Or)
    #[must_use]
    pub const fn never() -> Self {
        Self::Or(SmallVec::new_const())
    }
}

impl<P> std::ops::Not for Rule<P> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

// ============================================================================
// SECTION: Default Implementations
// ============================================================================

impl<P> Default for Rule<P> {
    /// Creates an empty And rule (trivially satisfied)
    fn default() -> Self {
        Self::always()
    }
}
