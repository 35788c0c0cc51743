// crates/doc-gate-core/src/runtime/evaluator.rs
// ============================================================================
// Module: Doc Gate Policy Evaluator
// Description: Deterministic per-request authorization and validation engine.
// Purpose: Produce an Allow/Deny decision for every access request.
// Dependencies: crate::core, crate::interfaces, crate::runtime
// ============================================================================

//! ## Overview
//! The evaluator runs the fixed pipeline: schema lookup, admin resolution,
//! access-context construction, authorization, then payload validation.
//! Authorization runs strictly before validation, so an unauthorized caller
//! never learns whether its payload was well-formed. Denials are decision
//! values; only store faults surface as errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::decision::Decision;
use crate::core::decision::DenyReason;
use crate::core::policy::AccessContext;
use crate::core::request::Operation;
use crate::core::request::Request;
use crate::core::schema::CollectionSchema;
use crate::core::schema::SchemaRegistry;
use crate::core::value::Document;
use crate::interfaces::DataStore;
use crate::interfaces::StoreError;
use crate::runtime::resolver::resolve_admin;
use crate::runtime::validator::validate_create;
use crate::runtime::validator::validate_update;

// ============================================================================
// SECTION: Policy Evaluator
// ============================================================================

/// Deterministic policy evaluator over a fixed schema registry.
///
/// # Invariants
/// - The registry is immutable for the evaluator's lifetime.
/// - Admin status is resolved fresh for every request; nothing is cached
///   across evaluations.
/// - Identical (registry, store contents, request) triples yield identical
///   decisions.
#[derive(Debug, Clone)]
pub struct PolicyEvaluator<S> {
    /// Collection schema table consulted per request.
    registry: SchemaRegistry,
    /// Document store used for the admin lookup.
    store: S,
}

impl<S: DataStore> PolicyEvaluator<S> {
    /// Creates an evaluator over the given registry and store.
    #[must_use]
    pub const fn new(registry: SchemaRegistry, store: S) -> Self {
        Self {
            registry,
            store,
        }
    }

    /// Creates an evaluator over the built-in schema table.
    #[must_use]
    pub fn with_builtin(store: S) -> Self {
        Self::new(SchemaRegistry::builtin(), store)
    }

    /// Returns the evaluator's schema registry.
    #[must_use]
    pub const fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Evaluates one access request to a decision.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the admin lookup cannot read the store.
    /// Policy denials are never errors.
    pub fn evaluate(&self, request: &Request) -> Result<Decision, StoreError> {
        let Some(schema) = self.registry.lookup(&request.collection) else {
            return Ok(Decision::Deny(DenyReason::UnknownCollection {
                collection: request.collection.clone(),
            }));
        };

        let admin = resolve_admin(&self.store, &request.principal)?;
        let ctx = access_context(schema, request, admin.is_admin);

        let policy = schema.policy_for(request.operation);
        if !policy.eval(&ctx) {
            return Ok(Decision::Deny(classify_denial(schema, request, &ctx)));
        }

        if request.operation.carries_payload() {
            let empty = Document::new();
            let payload = request.payload.as_ref().unwrap_or(&empty);
            let outcome = match request.operation {
                Operation::Create => validate_create(schema, payload),
                _ => validate_update(schema, payload),
            };
            if let Err(error) = outcome {
                return Ok(Decision::from(error));
            }
        }

        Ok(Decision::Allow)
    }
}

// ============================================================================
// SECTION: Context Construction
// ============================================================================

/// Builds the per-request predicate context snapshot.
fn access_context(schema: &CollectionSchema, request: &Request, admin: bool) -> AccessContext {
    AccessContext {
        authenticated: request.principal.is_authenticated(),
        admin,
        owner: schema.ownership.matches(
            &request.principal,
            request.operation,
            &request.doc_id,
            request.payload.as_ref(),
            request.existing.as_ref(),
        ),
        resource_id_equals_request_id: request
            .principal
            .uid()
            .is_some_and(|uid| uid == request.doc_id.as_str()),
    }
}

/// Distinguishes ownership-mismatch denials from plain unauthorized ones.
///
/// The failed policy is re-evaluated with the ownership facts forced true; a
/// pass means ownership alone was the blocker.
fn classify_denial(schema: &CollectionSchema, request: &Request, ctx: &AccessContext) -> DenyReason {
    let forced = AccessContext {
        owner: true,
        resource_id_equals_request_id: true,
        ..*ctx
    };
    if schema.policy_for(request.operation).eval(&forced) {
        DenyReason::OwnershipMismatch
    } else {
        DenyReason::Unauthorized
    }
}
