// crates/doc-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Doc Gate Interfaces
// Description: Backend-agnostic interface for document storage.
// Purpose: Define the contract surface the evaluator uses to read documents.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how the evaluator reaches external systems without
//! embedding backend-specific details. Implementations must be deterministic
//! and fail closed on missing data: an absent document is `Ok(None)`, while an
//! infrastructure fault is an error the evaluator propagates unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identifiers::DocumentPath;
use crate::core::value::Document;

// ============================================================================
// SECTION: Data Store
// ============================================================================

/// Document store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing store reported an error.
    #[error("store error: {0}")]
    Store(String),
}

/// Backend-agnostic read interface over stored documents.
///
/// The evaluator only ever reads: it fetches the caller's user record for the
/// admin lookup. All other document access is supplied by the caller on the
/// request itself.
pub trait DataStore {
    /// Fetches the document at the given path.
    ///
    /// Returns `Ok(None)` when the document does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store cannot be read.
    fn get(&self, path: &DocumentPath) -> Result<Option<Document>, StoreError>;
}
