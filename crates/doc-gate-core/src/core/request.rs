// crates/doc-gate-core/src/core/request.rs
// ============================================================================
// Module: Doc Gate Access Requests
// Description: Operation kinds and the per-call access request value.
// Purpose: Capture everything a single evaluation needs as one immutable value.
// Dependencies: crate::core::{identifiers, principal, value}, serde
// ============================================================================

//! ## Overview
//! An access request is a per-call value object with no persistent identity.
//! Create requests carry a full candidate payload; update requests carry a
//! partial delta. Update and delete requests additionally carry the existing
//! document when ownership or equality checks apply - fetching it is the
//! caller's responsibility, keeping the evaluator free of query logic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::CollectionId;
use crate::core::identifiers::DocumentId;
use crate::core::principal::Principal;
use crate::core::value::Document;

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Operation kinds subject to policy evaluation.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Read a single document.
    Get,
    /// Read a collection listing.
    List,
    /// Create a document with a full payload.
    Create,
    /// Update a document with a partial delta.
    Update,
    /// Delete a document.
    Delete,
}

impl Operation {
    /// Returns true when the operation carries a candidate payload.
    #[must_use]
    pub const fn carries_payload(self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }

    /// Returns true when the operation reads rather than writes.
    #[must_use]
    pub const fn is_read(self) -> bool {
        matches!(self, Self::Get | Self::List)
    }
}

// ============================================================================
// SECTION: Access Request
// ============================================================================

/// A single access request submitted for evaluation.
///
/// # Invariants
/// - `payload` is the full candidate object for Create and the partial delta
///   for Update; it is absent for read and delete operations.
/// - `existing` is the stored document supplied by the caller for Update and
///   Delete authorization; it is never fetched by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Requested operation.
    pub operation: Operation,
    /// Target collection.
    pub collection: CollectionId,
    /// Target document identifier.
    pub doc_id: DocumentId,
    /// Calling principal.
    pub principal: Principal,
    /// Candidate payload for Create/Update.
    #[serde(default)]
    pub payload: Option<Document>,
    /// Existing document contents for Update/Delete checks.
    #[serde(default)]
    pub existing: Option<Document>,
}

impl Request {
    /// Creates a read (Get) request.
    #[must_use]
    pub fn get(
        collection: impl Into<CollectionId>,
        doc_id: impl Into<DocumentId>,
        principal: Principal,
    ) -> Self {
        Self {
            operation: Operation::Get,
            collection: collection.into(),
            doc_id: doc_id.into(),
            principal,
            payload: None,
            existing: None,
        }
    }

    /// Creates a create request with a full candidate payload.
    #[must_use]
    pub fn create(
        collection: impl Into<CollectionId>,
        doc_id: impl Into<DocumentId>,
        principal: Principal,
        payload: Document,
    ) -> Self {
        Self {
            operation: Operation::Create,
            collection: collection.into(),
            doc_id: doc_id.into(),
            principal,
            payload: Some(payload),
            existing: None,
        }
    }

    /// Creates an update request with a partial delta and the existing document.
    #[must_use]
    pub fn update(
        collection: impl Into<CollectionId>,
        doc_id: impl Into<DocumentId>,
        principal: Principal,
        delta: Document,
        existing: Document,
    ) -> Self {
        Self {
            operation: Operation::Update,
            collection: collection.into(),
            doc_id: doc_id.into(),
            principal,
            payload: Some(delta),
            existing: Some(existing),
        }
    }

    /// Creates a delete request with the existing document.
    #[must_use]
    pub fn delete(
        collection: impl Into<CollectionId>,
        doc_id: impl Into<DocumentId>,
        principal: Principal,
        existing: Document,
    ) -> Self {
        Self {
            operation: Operation::Delete,
            collection: collection.into(),
            doc_id: doc_id.into(),
            principal,
            payload: None,
            existing: Some(existing),
        }
    }
}
