// crates/doc-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Doc Gate Runtime
// Description: Deterministic evaluation engine and supporting helpers.
// Purpose: Execute access requests against schemas and the document store.
// Dependencies: crate::{core, interfaces}, rule-logic
// ============================================================================

//! ## Overview
//! Runtime modules implement the evaluation pipeline: admin resolution,
//! payload validation, and the policy evaluator that ties them together. All
//! external surfaces must call into the same evaluator to preserve
//! decision invariance.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod evaluator;
pub mod resolver;
pub mod store;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use evaluator::PolicyEvaluator;
pub use resolver::resolve_admin;
pub use store::InMemoryDataStore;
pub use validator::validate_create;
pub use validator::validate_update;
