// crates/doc-gate-config/src/policy.rs
// ============================================================================
// Module: Policy Expressions
// Description: Declarative access policy expressions for schema tables.
// Purpose: Compile TOML policy declarations into core access rules.
// Dependencies: doc-gate-core, rule-logic, serde
// ============================================================================

//! ## Overview
//! Policy expressions are the configuration-facing form of access rules. Leaf
//! expressions are plain strings (`"admin"`, `"owner"`), combinators are
//! tables (`{ any_of = ["admin", "owner"] }`), and the default for an omitted
//! operation is `nobody` so unconfigured operations fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use doc_gate_core::AccessPredicate;
use doc_gate_core::AccessRule;
use rule_logic::Rule;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Policy Expressions
// ============================================================================

/// Declarative access policy expression.
///
/// # Invariants
/// - Compilation is total: every expression maps to a rule tree.
/// - The default expression denies every caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyExpr {
    /// Satisfied by every caller.
    Anyone,
    /// Satisfied by no caller.
    #[default]
    Nobody,
    /// The caller must be authenticated.
    Authenticated,
    /// The caller must be an administrator.
    Admin,
    /// The caller must own the target document.
    Owner,
    /// The target document id must equal the caller's identifier.
    ResourceIdEqualsRequestId,
    /// Every sub-expression must hold.
    AllOf(Vec<PolicyExpr>),
    /// At least one sub-expression must hold.
    AnyOf(Vec<PolicyExpr>),
    /// The sub-expression must not hold.
    Not(Box<PolicyExpr>),
}

impl PolicyExpr {
    /// Compiles the expression into a core access rule.
    #[must_use]
    pub fn compile(&self) -> AccessRule {
        match self {
            Self::Anyone => Rule::always(),
            Self::Nobody => Rule::never(),
            Self::Authenticated => Rule::predicate(AccessPredicate::Authenticated),
            Self::Admin => Rule::predicate(AccessPredicate::Admin),
            Self::Owner => Rule::predicate(AccessPredicate::Owner),
            Self::ResourceIdEqualsRequestId => {
                Rule::predicate(AccessPredicate::ResourceIdEqualsRequestId)
            }
            Self::AllOf(exprs) => Rule::and(exprs.iter().map(Self::compile).collect()),
            Self::AnyOf(exprs) => Rule::or(exprs.iter().map(Self::compile).collect()),
            Self::Not(expr) => Rule::negate(expr.compile()),
        }
    }
}
