// crates/doc-gate-core/src/core/decision.rs
// ============================================================================
// Module: Doc Gate Decisions
// Description: Allow/Deny outcomes and structured denial reasons.
// Purpose: Make every evaluation outcome a value; policy denials never abort.
// Dependencies: crate::core::{identifiers, schema, value}, serde, thiserror
// ============================================================================

//! ## Overview
//! Evaluation always produces a decision value. Denials carry a structured
//! reason so callers can surface precise diagnostics, but a denial is never
//! an error: only infrastructure faults (store read failures) propagate as
//! `Err` from the evaluator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::CollectionId;
use crate::core::identifiers::FieldName;
use crate::core::schema::FieldType;
use crate::core::value::ValueKind;

// ============================================================================
// SECTION: Validation Errors
// ============================================================================

/// Structural payload validation failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Produced deterministically: the first failing field in lexicographic
///   order wins within each check phase.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// A field required on create is absent from the payload.
    #[error("missing required field: {field}")]
    MissingRequiredField {
        /// Name of the absent field.
        field: FieldName,
    },
    /// A payload field is outside the operation's whitelist.
    #[error("unexpected field: {field}")]
    UnexpectedField {
        /// Name of the offending field.
        field: FieldName,
    },
    /// A payload value does not match the field's declared type.
    #[error("type mismatch for field {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Name of the offending field.
        field: FieldName,
        /// Declared field type.
        expected: FieldType,
        /// Runtime kind of the supplied value.
        actual: ValueKind,
    },
}

// ============================================================================
// SECTION: Denial Reasons
// ============================================================================

/// Structured reason attached to a Deny decision.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The collection has no configured schema (default-deny).
    #[error("unknown collection: {collection}")]
    UnknownCollection {
        /// The unconfigured collection.
        collection: CollectionId,
    },
    /// The operation's authorization predicate evaluated false.
    #[error("unauthorized")]
    Unauthorized,
    /// Authorization failed solely because the caller does not own the target.
    #[error("ownership mismatch")]
    OwnershipMismatch,
    /// The payload failed structural validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

// ============================================================================
// SECTION: Decisions
// ============================================================================

/// Final Allow/Deny outcome of a policy evaluation.
///
/// # Invariants
/// - A pure function of (schema, admin lookup result, request).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The operation is permitted.
    Allow,
    /// The operation is denied for the given reason.
    Deny(DenyReason),
}

impl Decision {
    /// Returns true when the decision permits the operation.
    #[must_use]
    pub const fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the denial reason when the decision denies the operation.
    #[must_use]
    pub const fn deny_reason(&self) -> Option<&DenyReason> {
        match self {
            Self::Allow => None,
            Self::Deny(reason) => Some(reason),
        }
    }
}

impl From<ValidationError> for Decision {
    fn from(error: ValidationError) -> Self {
        Self::Deny(DenyReason::Validation(error))
    }
}
