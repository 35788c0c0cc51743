// crates/doc-gate-core/src/core/policy.rs
// ============================================================================
// Module: Doc Gate Access Policies
// Description: Access predicates and the rule trees composed from them.
// Purpose: Express per-operation authorization as rule-logic trees over a
//          small, fixed predicate vocabulary.
// Dependencies: rule-logic, serde
// ============================================================================

//! ## Overview
//! Authorization policies are [`Rule`] trees whose leaves are drawn from a
//! fixed four-predicate vocabulary. The evaluator computes an
//! [`AccessContext`] snapshot per request and evaluates each operation's
//! tree against it. Policies are pure data; evaluation is deterministic and
//! fail-closed (an unknown collection has no policy and denies everything).

// ============================================================================
// SECTION: Imports
// ============================================================================

use rule_logic::PredicateEval;
use rule_logic::Rule;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Access Predicates
// ============================================================================

/// Atomic authorization predicate consulted by policy rule trees.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessPredicate {
    /// The caller carries a stable identifier.
    Authenticated,
    /// The caller's user record carries `isAdmin == true`.
    Admin,
    /// The caller owns the target document per the collection ownership rule.
    Owner,
    /// The target document id equals the caller's identifier.
    ResourceIdEqualsRequestId,
}

/// Snapshot of per-request facts consulted by access predicates.
///
/// # Invariants
/// - Computed once per evaluation from (request, admin lookup, ownership rule).
/// - Values are snapshots; predicate evaluation never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessContext {
    /// True when the principal carries a stable identifier.
    pub authenticated: bool,
    /// True when the principal resolved as an administrator.
    pub admin: bool,
    /// True when the collection ownership rule matched the principal.
    pub owner: bool,
    /// True when the target document id equals the principal's identifier.
    pub resource_id_equals_request_id: bool,
}

impl PredicateEval for AccessPredicate {
    type Context<'a> = AccessContext;

    fn eval_predicate(&self, ctx: &AccessContext) -> bool {
        match self {
            Self::Authenticated => ctx.authenticated,
            Self::Admin => ctx.admin,
            Self::Owner => ctx.owner,
            Self::ResourceIdEqualsRequestId => ctx.resource_id_equals_request_id,
        }
    }
}

// ============================================================================
// SECTION: Access Rules
// ============================================================================

/// Authorization rule tree over [`AccessPredicate`] leaves.
pub type AccessRule = Rule<AccessPredicate>;

/// Leaf rule: the caller must be authenticated.
#[must_use]
pub const fn authenticated() -> AccessRule {
    Rule::predicate(AccessPredicate::Authenticated)
}

/// Leaf rule: the caller must be an administrator.
#[must_use]
pub const fn admin() -> AccessRule {
    Rule::predicate(AccessPredicate::Admin)
}

/// Leaf rule: the caller must own the target document.
#[must_use]
pub const fn owner() -> AccessRule {
    Rule::predicate(AccessPredicate::Owner)
}

/// Leaf rule: the target document id must equal the caller's identifier.
#[must_use]
pub const fn resource_id_equals_request_id() -> AccessRule {
    Rule::predicate(AccessPredicate::ResourceIdEqualsRequestId)
}

/// Rule satisfied by every caller.
#[must_use]
pub const fn anyone() -> AccessRule {
    Rule::always()
}

/// Rule satisfied by no caller.
#[must_use]
pub const fn nobody() -> AccessRule {
    Rule::never()
}
