// crates/doc-gate-config/src/lib.rs
// ============================================================================
// Module: Doc Gate Config Library
// Description: Canonical schema-table config model and validation.
// Purpose: Single source of truth for doc-gate.toml semantics.
// Dependencies: doc-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! `doc-gate-config` defines the configuration model for Doc Gate schema
//! tables. It provides strict, fail-closed validation and compiles validated
//! tables into the core schema registry.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod examples;
pub mod policy;
pub mod table;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use examples::default_table_toml;
pub use policy::PolicyExpr;
pub use table::CollectionConfig;
pub use table::ConfigError;
pub use table::FieldTypeConfig;
pub use table::SchemaTableConfig;
