// crates/doc-gate-core/src/core/principal.rs
// ============================================================================
// Module: Doc Gate Principals
// Description: Calling principal model and resolved admin status.
// Purpose: Represent authenticated and anonymous callers uniformly.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A principal is the caller of an operation. It is assumed already
//! authenticated by an upstream layer and carries at most a stable user
//! identifier and an email address. The absence of a `uid` denotes an
//! anonymous caller. Email is informational only; authorization never keys
//! off it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Principal
// ============================================================================

/// Calling principal of an access request.
///
/// # Invariants
/// - `uid` absence denotes an unauthenticated caller.
/// - Ownership checks compare `uid` to document fields, never `email`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Principal {
    /// Stable user identifier, absent for anonymous callers.
    #[serde(default)]
    pub uid: Option<String>,
    /// Email address, informational only.
    #[serde(default)]
    pub email: Option<String>,
}

impl Principal {
    /// Creates an anonymous (unauthenticated) principal.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            uid: None,
            email: None,
        }
    }

    /// Creates an authenticated principal with the given identifier and email.
    #[must_use]
    pub fn authenticated(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            email: Some(email.into()),
        }
    }

    /// Returns true when the principal carries a stable identifier.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.uid.is_some()
    }

    /// Returns the principal's identifier when authenticated.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }
}

// ============================================================================
// SECTION: Admin Status
// ============================================================================

/// Resolved administrator status of a principal.
///
/// # Invariants
/// - Resolved fresh for every evaluation; never cached across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdminStatus {
    /// True when the principal's user record carries `isAdmin == true`.
    pub is_admin: bool,
}

impl AdminStatus {
    /// Status for a caller confirmed to be an administrator.
    pub const ADMIN: Self = Self {
        is_admin: true,
    };

    /// Status for a caller that is not an administrator.
    pub const NOT_ADMIN: Self = Self {
        is_admin: false,
    };
}
