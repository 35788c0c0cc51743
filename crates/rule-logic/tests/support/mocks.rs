// crates/rule-logic/tests/support/mocks.rs
// ============================================================================
// Module: Mock Predicates
// Description: Shared mock predicates and contexts for rule tests.
// ============================================================================
//! ## Overview
//! Mock predicate and context types used by integration tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use rule_logic::PredicateEval;
use serde::Deserialize;
use serde::Serialize;

// ========================================================================
// Mock Predicate Types
// ========================================================================

/// Simple mock predicate for testing the rule system.
///
/// This predicate type is domain-agnostic and allows testing the core
/// boolean algebra without any domain-specific logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MockPredicate {
    /// Always returns true.
    AlwaysTrue,

    /// Always returns false.
    AlwaysFalse,

    /// Returns true if the context value is greater than or equal to threshold.
    ValueGte(i32),

    /// Returns true if the context value equals the specified value.
    ValueEq(i32),

    /// Returns true if context flags contain all required flags.
    HasAllFlags(u64),
}

// ========================================================================
// Mock Context Type
// ========================================================================

/// Mock context that provides test data for predicate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MockContext {
    /// Integer value for numeric predicates.
    pub value: i32,
    /// Bit flags for flag predicates.
    pub flags: u64,
}

impl PredicateEval for MockPredicate {
    type Context<'a> = MockContext;

    fn eval_predicate(&self, ctx: &MockContext) -> bool {
        match self {
            Self::AlwaysTrue => true,
            Self::AlwaysFalse => false,
            Self::ValueGte(threshold) => ctx.value >= *threshold,
            Self::ValueEq(expected) => ctx.value == *expected,
            Self::HasAllFlags(required) => ctx.flags & required == *required,
        }
    }
}
