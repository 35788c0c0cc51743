// crates/doc-gate-core/src/core/mod.rs
// ============================================================================
// Module: Doc Gate Core Types
// Description: Canonical request, document, schema, and decision structures.
// Purpose: Provide stable, serializable types for policy evaluation.
// Dependencies: rule-logic, serde
// ============================================================================

//! ## Overview
//! Core types define the document model, the calling principal, per-collection
//! schemas, access policies, and the decision values the evaluator produces.
//! These types are the canonical source of truth for any derived API surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod decision;
pub mod identifiers;
pub mod policy;
pub mod principal;
pub mod request;
pub mod schema;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use decision::Decision;
pub use decision::DenyReason;
pub use decision::ValidationError;
pub use identifiers::CollectionId;
pub use identifiers::DocumentId;
pub use identifiers::DocumentPath;
pub use identifiers::FieldName;
pub use policy::AccessContext;
pub use policy::AccessPredicate;
pub use policy::AccessRule;
pub use principal::AdminStatus;
pub use principal::Principal;
pub use request::Operation;
pub use request::Request;
pub use schema::CollectionSchema;
pub use schema::CollectionSchemaBuilder;
pub use schema::FieldType;
pub use schema::OwnershipRule;
pub use schema::SchemaRegistry;
pub use schema::StructSchema;
pub use value::Document;
pub use value::FieldValue;
pub use value::Timestamp;
pub use value::ValueKind;
