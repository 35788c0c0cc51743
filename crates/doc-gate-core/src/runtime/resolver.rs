// crates/doc-gate-core/src/runtime/resolver.rs
// ============================================================================
// Module: Doc Gate Admin Resolver
// Description: Per-request administrator status lookup.
// Purpose: Resolve a principal's admin flag from its stored user record.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! Administrator status lives in the caller's own user record at
//! `/users/{uid}` under the `isAdmin` field. Resolution happens fresh on
//! every evaluation so revocation takes effect on the next request; anonymous
//! callers resolve without touching the store. Missing records, absent flags,
//! and non-boolean flag values all resolve to not-admin (fail closed); only
//! store faults propagate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::DocumentPath;
use crate::core::identifiers::FieldName;
use crate::core::principal::AdminStatus;
use crate::core::principal::Principal;
use crate::core::value::FieldValue;
use crate::interfaces::DataStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Admin Resolution
// ============================================================================

/// Collection holding user records consulted for the admin lookup.
const USERS_COLLECTION: &str = "users";

/// Field carrying the administrator flag inside a user record.
const ADMIN_FLAG_FIELD: &str = "isAdmin";

/// Resolves the administrator status of a principal.
///
/// # Invariants
/// - Anonymous principals resolve to not-admin without a store read.
/// - A missing record, a missing flag, or a non-boolean flag value all
///   resolve to not-admin.
///
/// # Errors
///
/// Returns [`StoreError`] when the user record cannot be read.
pub fn resolve_admin<S: DataStore + ?Sized>(
    store: &S,
    principal: &Principal,
) -> Result<AdminStatus, StoreError> {
    let Some(uid) = principal.uid() else {
        return Ok(AdminStatus::NOT_ADMIN);
    };
    let path = DocumentPath::new(USERS_COLLECTION, uid);
    let record = store.get(&path)?;
    let flag = record
        .as_ref()
        .and_then(|doc| doc.get(&FieldName::new(ADMIN_FLAG_FIELD)))
        .and_then(FieldValue::as_boolean);
    if flag == Some(true) {
        Ok(AdminStatus::ADMIN)
    } else {
        Ok(AdminStatus::NOT_ADMIN)
    }
}
