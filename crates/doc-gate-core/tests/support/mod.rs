// crates/doc-gate-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared fixtures and result helpers for core integration tests.
// ============================================================================
//! ## Overview
//! Shared helpers: Result-based assertions, document fixtures matching the
//! built-in schema table, and instrumented store implementations.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only output, panic-based assertions, and per-test fixture subsets are permitted."
)]

use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use doc_gate_core::DataStore;
use doc_gate_core::Document;
use doc_gate_core::DocumentPath;
use doc_gate_core::InMemoryDataStore;
use doc_gate_core::StoreError;
use doc_gate_core::Timestamp;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across core integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

// ========================================================================
// Document Fixtures
// ========================================================================

/// Builds a fully valid user record for the given uid.
pub fn valid_user(uid: &str, is_admin: bool) -> Document {
    Document::new()
        .with("uid", uid)
        .with("about", "robotics enthusiast")
        .with("batch", "2024")
        .with("branch", "electronics")
        .with("contact", "+911234567890")
        .with("cvLink", "https://example.com/cv.pdf")
        .with("email", format!("{uid}@example.com"))
        .with("fbId", "fb-handle")
        .with("instaId", "insta-handle")
        .with("interests", "embedded systems")
        .with("isAdmin", is_admin)
        .with("isMember", true)
        .with("linkedinId", "linkedin-handle")
        .with("name", "Test User")
        .with("position", "member")
        .with("profileImageUrl", "https://example.com/avatar.png")
        .with("quote", "build things")
}

/// Builds a fully valid feedback document.
pub fn valid_feedback() -> Document {
    Document::new()
        .with("dateTime", "2026-02-01T10:00:00Z")
        .with("feedback", "great workshop")
        .with("isMember", true)
}

/// Builds a fully valid push token document.
pub fn valid_push_token() -> Document {
    Document::new()
        .with("androidId", "device-42")
        .with("createdAt", Timestamp::UnixMillis(1_760_000_000_000))
        .with("deviceToken", "token-abc")
        .with("platform", "android")
}

/// Builds a fully valid notification document.
pub fn valid_notification() -> Document {
    Document::new()
        .with("date", "2026-02-01")
        .with("link", "https://example.com/post")
        .with("msg", "meeting at five")
        .with("title", "announcement")
}

// ========================================================================
// Store Fixtures
// ========================================================================

/// Seeds a user record so the uid resolves with the given admin flag.
///
/// # Errors
/// Returns a `StoreError` when the seed write fails.
pub fn seed_user(store: &InMemoryDataStore, uid: &str, is_admin: bool) -> Result<(), StoreError> {
    store.set(&DocumentPath::new("users", uid), valid_user(uid, is_admin))
}

/// Store wrapper counting every read, for lookup-frequency assertions.
#[derive(Debug, Default, Clone)]
pub struct CountingStore {
    /// Wrapped in-memory store.
    inner: InMemoryDataStore,
    /// Number of `get` calls observed.
    reads: Arc<AtomicUsize>,
}

impl CountingStore {
    /// Creates a counting wrapper over a fresh in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the wrapped store for seeding.
    pub fn inner(&self) -> &InMemoryDataStore {
        &self.inner
    }

    /// Returns the number of reads observed so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DataStore for CountingStore {
    fn get(&self, path: &DocumentPath) -> Result<Option<Document>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(path)
    }
}

/// Store that fails every read, for fault-propagation assertions.
#[derive(Debug, Default, Clone)]
pub struct FailingStore {
    /// Paths requested before each failure, for diagnostics.
    requested: Arc<Mutex<Vec<String>>>,
}

impl FailingStore {
    /// Creates a store that fails every read.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for FailingStore {
    fn get(&self, path: &DocumentPath) -> Result<Option<Document>, StoreError> {
        if let Ok(mut guard) = self.requested.lock() {
            guard.push(path.to_string());
        }
        Err(StoreError::Store("backend unavailable".to_string()))
    }
}
