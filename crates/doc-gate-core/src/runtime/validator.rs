// crates/doc-gate-core/src/runtime/validator.rs
// ============================================================================
// Module: Doc Gate Payload Validator
// Description: Structural validation of create and update payloads.
// Purpose: Enforce required fields, field whitelists, and declared types.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Validation is a pure function of (schema, payload); it never consults the
//! store or the clock. Creates check the required set against the full
//! candidate payload, then the allowed whitelist, then declared types.
//! Updates check the delta against the updatable whitelist and declared types
//! only - required-field presence is a create-time concern. Within each phase
//! the first failing field in lexicographic order is reported.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::core::decision::ValidationError;
use crate::core::identifiers::FieldName;
use crate::core::schema::CollectionSchema;
use crate::core::schema::FieldType;
use crate::core::value::Document;
use crate::core::value::FieldValue;

// ============================================================================
// SECTION: Create Validation
// ============================================================================

/// Validates a full candidate payload for a create operation.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, checking required
/// fields, then unexpected fields, then declared types.
pub fn validate_create(
    schema: &CollectionSchema,
    payload: &Document,
) -> Result<(), ValidationError> {
    for field in &schema.required_fields {
        if !payload.contains(field) {
            return Err(ValidationError::MissingRequiredField {
                field: field.clone(),
            });
        }
    }
    check_whitelist(payload, &schema.allowed_fields)?;
    check_types(schema, payload)
}

// ============================================================================
// SECTION: Update Validation
// ============================================================================

/// Validates a partial delta payload for an update operation.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, checking the updatable
/// whitelist, then declared types.
pub fn validate_update(
    schema: &CollectionSchema,
    delta: &Document,
) -> Result<(), ValidationError> {
    check_whitelist(delta, &schema.updatable_fields)?;
    check_types(schema, delta)
}

// ============================================================================
// SECTION: Shared Checks
// ============================================================================

/// Rejects the first payload field outside the given whitelist.
fn check_whitelist(
    payload: &Document,
    whitelist: &BTreeSet<FieldName>,
) -> Result<(), ValidationError> {
    for name in payload.field_names() {
        if !whitelist.contains(name) {
            return Err(ValidationError::UnexpectedField {
                field: name.clone(),
            });
        }
    }
    Ok(())
}

/// Checks every payload field with a declared type; undeclared fields pass.
fn check_types(schema: &CollectionSchema, payload: &Document) -> Result<(), ValidationError> {
    for (name, value) in payload.iter() {
        if let Some(expected) = schema.field_type(name) {
            check_type(name, expected, value)?;
        }
    }
    Ok(())
}

/// Checks one value against its declared type, recursing into lists.
fn check_type(
    field: &FieldName,
    expected: &FieldType,
    value: &FieldValue,
) -> Result<(), ValidationError> {
    match (expected, value) {
        (FieldType::Text, FieldValue::Text(_))
        | (FieldType::Boolean, FieldValue::Boolean(_))
        | (FieldType::Number, FieldValue::Number(_))
        | (FieldType::Timestamp, FieldValue::Timestamp(_)) => Ok(()),
        (FieldType::TextList, FieldValue::List(items)) => {
            for item in items {
                if !matches!(item, FieldValue::Text(_)) {
                    return Err(mismatch(field, expected, item));
                }
            }
            Ok(())
        }
        (FieldType::StructList(element), FieldValue::List(items)) => {
            for item in items {
                let FieldValue::Map(entries) = item else {
                    return Err(mismatch(field, expected, item));
                };
                if let Some(element) = element {
                    for (name, entry_value) in entries {
                        if let Some(entry_type) = element.field_type(name) {
                            check_type(name, entry_type, entry_value)?;
                        }
                    }
                }
            }
            Ok(())
        }
        _ => Err(mismatch(field, expected, value)),
    }
}

/// Builds a type-mismatch error for the given field and value.
fn mismatch(field: &FieldName, expected: &FieldType, value: &FieldValue) -> ValidationError {
    ValidationError::TypeMismatch {
        field: field.clone(),
        expected: expected.clone(),
        actual: value.kind(),
    }
}
