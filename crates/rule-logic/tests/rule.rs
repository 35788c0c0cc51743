// crates/rule-logic/tests/rule.rs
// ============================================================================
// Module: Core Rule Tests
// Description: Tests for rule evaluation and structural analysis.
// ============================================================================
//! ## Overview
//! Integration tests for the core rule types and evaluation paths.

#[path = "support/mocks.rs"]
mod mocks;
mod support;

use mocks::MockContext;
use mocks::MockPredicate;
use rule_logic::Rule;
use rule_logic::convenience;
use rule_logic::rule;
use support::TestResult;
use support::ensure;

/// Checks a condition and returns a test error instead of panicking.
macro_rules! check {
    ($cond:expr $(,)?) => {{
        ensure($cond, concat!("Assertion failed: ", stringify!($cond)))?;
    }};
    ($cond:expr, $($arg:tt)+) => {{
        ensure($cond, format!($($arg)+))?;
    }};
}

// ============================================================================
// SECTION: Evaluation Tests
// ============================================================================

#[test]
fn predicate_leaf_delegates_to_domain() -> TestResult {
    let rule = Rule::predicate(MockPredicate::ValueGte(10));
    check!(rule.eval(&MockContext {
        value: 10,
        flags: 0
    }));
    check!(!rule.eval(&MockContext {
        value: 9,
        flags: 0
    }));
    Ok(())
}

#[test]
fn and_requires_all_children() -> TestResult {
    let rule = Rule::and(vec![
        Rule::predicate(MockPredicate::ValueGte(5)),
        Rule::predicate(MockPredicate::HasAllFlags(0b11)),
    ]);
    check!(rule.eval(&MockContext {
        value: 7,
        flags: 0b111
    }));
    check!(!rule.eval(&MockContext {
        value: 7,
        flags: 0b01
    }));
    check!(!rule.eval(&MockContext {
        value: 3,
        flags: 0b11
    }));
    Ok(())
}

#[test]
fn or_requires_any_child() -> TestResult {
    let rule = Rule::or(vec![
        Rule::predicate(MockPredicate::ValueEq(1)),
        Rule::predicate(MockPredicate::ValueEq(2)),
    ]);
    check!(rule.eval(&MockContext {
        value: 2,
        flags: 0
    }));
    check!(!rule.eval(&MockContext {
        value: 3,
        flags: 0
    }));
    Ok(())
}

#[test]
fn not_inverts_child() -> TestResult {
    let rule = Rule::negate(Rule::predicate(MockPredicate::AlwaysTrue));
    check!(!rule.eval(&MockContext::default()));
    let rule = !Rule::predicate(MockPredicate::AlwaysFalse);
    check!(rule.eval(&MockContext::default()));
    Ok(())
}

#[test]
fn empty_and_is_always_satisfied() -> TestResult {
    let rule: Rule<MockPredicate> = Rule::always();
    check!(rule.eval(&MockContext::default()));
    check!(rule.is_trivially_satisfied());
    Ok(())
}

#[test]
fn empty_or_is_never_satisfied() -> TestResult {
    let rule: Rule<MockPredicate> = Rule::never();
    check!(!rule.eval(&MockContext::default()));
    check!(rule.is_trivially_unsatisfiable());
    Ok(())
}

#[test]
fn default_rule_is_trivially_satisfied() -> TestResult {
    let rule: Rule<MockPredicate> = Rule::default();
    check!(rule.is_trivially_satisfied());
    check!(rule.eval(&MockContext::default()));
    Ok(())
}

#[test]
fn nested_composition_evaluates_depth_first() -> TestResult {
    let rule = rule! {
        and [
            (predicate(MockPredicate::ValueGte(0))),
            (or [
                (predicate(MockPredicate::HasAllFlags(0b100))),
                (not(predicate(MockPredicate::ValueEq(9))))
            ])
        ]
    };
    check!(rule.eval(&MockContext {
        value: 1,
        flags: 0
    }));
    check!(!rule.eval(&MockContext {
        value: 9,
        flags: 0
    }));
    check!(rule.eval(&MockContext {
        value: 9,
        flags: 0b100
    }));
    Ok(())
}

// ============================================================================
// SECTION: Structural Analysis Tests
// ============================================================================

#[test]
fn triviality_analysis_recurses() -> TestResult {
    let satisfied: Rule<MockPredicate> = Rule::and(vec![Rule::always(), Rule::always()]);
    check!(satisfied.is_trivially_satisfied());

    let unsatisfiable: Rule<MockPredicate> = Rule::and(vec![Rule::always(), Rule::never()]);
    check!(unsatisfiable.is_trivially_unsatisfiable());

    let negated: Rule<MockPredicate> = Rule::negate(Rule::never());
    check!(negated.is_trivially_satisfied());

    let leaf = Rule::predicate(MockPredicate::AlwaysTrue);
    check!(!leaf.is_trivially_satisfied());
    check!(!leaf.is_trivially_unsatisfiable());
    Ok(())
}

#[test]
fn complexity_counts_every_node() -> TestResult {
    let rule = convenience::all(vec![
        convenience::predicate(MockPredicate::AlwaysTrue),
        convenience::not(convenience::predicate(MockPredicate::AlwaysFalse)),
    ]);
    check!(rule.complexity() == 4, "expected 4 nodes, got {}", rule.complexity());
    Ok(())
}

#[test]
fn predicates_walks_leaves_in_order() -> TestResult {
    let rule = convenience::any(vec![
        convenience::predicate(MockPredicate::ValueEq(1)),
        convenience::all(vec![
            convenience::predicate(MockPredicate::ValueEq(2)),
            convenience::predicate(MockPredicate::ValueEq(3)),
        ]),
    ]);
    let leaves = rule.predicates();
    check!(
        leaves
            == vec![
                &MockPredicate::ValueEq(1),
                &MockPredicate::ValueEq(2),
                &MockPredicate::ValueEq(3)
            ],
        "unexpected leaf order"
    );
    Ok(())
}

// ============================================================================
// SECTION: Serialization Tests
// ============================================================================

#[test]
fn rule_round_trips_through_serde() -> TestResult {
    let rule = convenience::all(vec![
        convenience::predicate(MockPredicate::HasAllFlags(0b10)),
        convenience::any(vec![
            convenience::predicate(MockPredicate::ValueGte(4)),
            convenience::not(convenience::predicate(MockPredicate::AlwaysFalse)),
        ]),
    ]);
    let encoded = serde_json::to_string(&rule)?;
    let decoded: Rule<MockPredicate> = serde_json::from_str(&encoded)?;
    check!(decoded == rule, "serde round trip altered the rule tree");
    Ok(())
}
