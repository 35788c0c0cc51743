// crates/doc-gate-core/tests/resolver.rs
// ============================================================================
// Module: Resolver Tests
// Description: Administrator lookup behavior against the document store.
// Purpose: Ensure admin resolution fails closed and reads per request.
// Dependencies: doc-gate-core
// ============================================================================

//! Admin resolution tests for the evaluation pipeline.

mod support;

use doc_gate_core::AdminStatus;
use doc_gate_core::Document;
use doc_gate_core::DocumentPath;
use doc_gate_core::InMemoryDataStore;
use doc_gate_core::Principal;
use doc_gate_core::StoreError;
use doc_gate_core::resolve_admin;

use support::CountingStore;
use support::FailingStore;
use support::TestResult;
use support::ensure;
use support::seed_user;

#[test]
fn anonymous_principal_resolves_without_a_store_read() -> TestResult {
    let store = CountingStore::new();
    let status = resolve_admin(&store, &Principal::anonymous())?;
    ensure(status == AdminStatus::NOT_ADMIN, "anonymous callers are never admins")?;
    ensure(store.reads() == 0, "anonymous resolution must not touch the store")
}

#[test]
fn missing_user_record_resolves_not_admin() -> TestResult {
    let store = InMemoryDataStore::new();
    let principal = Principal::authenticated("ghost", "ghost@example.com");
    let status = resolve_admin(&store, &principal)?;
    ensure(status == AdminStatus::NOT_ADMIN, "a missing record fails closed")
}

#[test]
fn false_admin_flag_resolves_not_admin() -> TestResult {
    let store = InMemoryDataStore::new();
    seed_user(&store, "user-1", false)?;
    let principal = Principal::authenticated("user-1", "user-1@example.com");
    let status = resolve_admin(&store, &principal)?;
    ensure(status == AdminStatus::NOT_ADMIN, "a false flag resolves to not-admin")
}

#[test]
fn non_boolean_admin_flag_resolves_not_admin() -> TestResult {
    let store = InMemoryDataStore::new();
    let record = Document::new().with("isAdmin", "true");
    store.set(&DocumentPath::new("users", "user-1"), record)?;
    let principal = Principal::authenticated("user-1", "user-1@example.com");
    let status = resolve_admin(&store, &principal)?;
    ensure(status == AdminStatus::NOT_ADMIN, "a text flag never grants admin")
}

#[test]
fn true_admin_flag_resolves_admin() -> TestResult {
    let store = InMemoryDataStore::new();
    seed_user(&store, "admin-1", true)?;
    let principal = Principal::authenticated("admin-1", "admin-1@example.com");
    let status = resolve_admin(&store, &principal)?;
    ensure(status == AdminStatus::ADMIN, "a true boolean flag grants admin")
}

#[test]
fn each_resolution_reads_the_store_again() -> TestResult {
    let store = CountingStore::new();
    seed_user(store.inner(), "user-1", false)?;
    let principal = Principal::authenticated("user-1", "user-1@example.com");
    resolve_admin(&store, &principal)?;
    resolve_admin(&store, &principal)?;
    ensure(store.reads() == 2, "admin status is never cached across resolutions")
}

#[test]
fn store_fault_propagates() -> TestResult {
    let store = FailingStore::new();
    let principal = Principal::authenticated("user-1", "user-1@example.com");
    let outcome = resolve_admin(&store, &principal);
    ensure(
        matches!(outcome, Err(StoreError::Store(_))),
        "store faults must propagate, not resolve to not-admin",
    )
}
