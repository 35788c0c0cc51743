// crates/doc-gate-core/src/lib.rs
// ============================================================================
// Module: Doc Gate Core Library
// Description: Public API surface for the Doc Gate core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Doc Gate core provides deterministic authorization and structural
//! validation for document-store access requests. Policies are rule trees
//! over a small predicate vocabulary, schemas are per-collection field
//! tables, and evaluation is a pure pipeline that fails closed. The crate is
//! backend-agnostic and integrates through explicit interfaces.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::DataStore;
pub use interfaces::StoreError;
pub use runtime::InMemoryDataStore;
pub use runtime::PolicyEvaluator;
pub use runtime::resolve_admin;
pub use runtime::validate_create;
pub use runtime::validate_update;
