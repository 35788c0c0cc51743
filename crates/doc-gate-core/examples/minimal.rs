// crates/doc-gate-core/examples/minimal.rs
// ============================================================================
// Module: Doc Gate Minimal Example
// Description: Minimal end-to-end evaluation using the in-memory store.
// Purpose: Demonstrate decision outcomes across the common request shapes.
// Dependencies: doc-gate-core
// ============================================================================

//! ## Overview
//! Evaluates a handful of requests against the built-in schema table using
//! the in-memory store. This example is backend-agnostic and suitable for
//! quick verification.

use doc_gate_core::Document;
use doc_gate_core::DocumentPath;
use doc_gate_core::InMemoryDataStore;
use doc_gate_core::PolicyEvaluator;
use doc_gate_core::Principal;
use doc_gate_core::Request;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryDataStore::new();
    let evaluator = PolicyEvaluator::with_builtin(store.clone());

    // Seed an administrator record so the admin lookup resolves.
    let admin_record = Document::new().with("uid", "admin-1").with("isAdmin", true);
    store.set(&DocumentPath::new("users", "admin-1"), admin_record)?;

    // Anyone may read public collections.
    let read = Request::get("projects", "p1", Principal::anonymous());
    let decision = evaluator.evaluate(&read)?;
    if !decision.is_allow() {
        return Err(Box::new(ExampleError("public read should be allowed")));
    }

    // Only administrators may publish notifications.
    let payload = Document::new()
        .with("date", "2026-02-01")
        .with("link", "https://example.com/post")
        .with("msg", "meeting at five")
        .with("title", "announcement");
    let admin = Principal::authenticated("admin-1", "admin-1@example.com");
    let publish = Request::create("notifications", "n1", admin, payload.clone());
    let decision = evaluator.evaluate(&publish)?;
    if !decision.is_allow() {
        return Err(Box::new(ExampleError("admin publish should be allowed")));
    }

    // Anonymous callers are turned away before validation runs.
    let anonymous_publish = Request::create("notifications", "n2", Principal::anonymous(), payload);
    let decision = evaluator.evaluate(&anonymous_publish)?;
    let _ = decision.deny_reason().ok_or(ExampleError("anonymous publish should be denied"))?;
    Ok(())
}
