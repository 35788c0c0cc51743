// crates/doc-gate-core/src/core/value.rs
// ============================================================================
// Module: Doc Gate Field Values
// Description: Runtime representation of document field values.
// Purpose: Provide a typed value model so structural checks can distinguish
//          timestamps from text and recurse into lists and nested maps.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Documents carry typed field values rather than raw JSON so the validator
//! can distinguish a timestamp from a string literal - the two are distinct
//! runtime types and never satisfy each other. Timestamps are explicit
//! caller-supplied values; the core never reads wall-clock time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::FieldName;

// ============================================================================
// SECTION: Time Values
// ============================================================================

/// Canonical timestamp value carried inside documents.
///
/// # Invariants
/// - Values are explicitly provided by callers; the core never reads wall-clock time.
/// - No validation is performed; monotonicity is a caller responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Timestamp {
    /// Unix epoch milliseconds.
    UnixMillis(i64),
    /// Monotonic logical time value.
    Logical(u64),
}

impl Timestamp {
    /// Returns the timestamp as unix milliseconds when available.
    #[must_use]
    pub const fn as_unix_millis(&self) -> Option<i64> {
        match self {
            Self::UnixMillis(value) => Some(*value),
            Self::Logical(_) => None,
        }
    }

    /// Returns the timestamp as logical time when available.
    #[must_use]
    pub const fn as_logical(&self) -> Option<u64> {
        match self {
            Self::UnixMillis(_) => None,
            Self::Logical(value) => Some(*value),
        }
    }
}

// ============================================================================
// SECTION: Field Values
// ============================================================================

/// Runtime value of a single document field.
///
/// # Invariants
/// - `Text` and `Timestamp` are distinct kinds; neither satisfies the other.
/// - Nested values are owned; sharing across documents is not supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// UTF-8 text value.
    Text(String),
    /// Boolean value.
    Boolean(bool),
    /// Numeric value (integral or fractional).
    Number(f64),
    /// Timestamp value supplied by the caller.
    Timestamp(Timestamp),
    /// Ordered list of values.
    List(Vec<FieldValue>),
    /// Nested map of named values.
    Map(BTreeMap<FieldName, FieldValue>),
}

impl FieldValue {
    /// Creates a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the runtime kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
        }
    }

    /// Returns the text content when this value is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean content when this value is a boolean.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Timestamp> for FieldValue {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

// ============================================================================
// SECTION: Value Kinds
// ============================================================================

/// Runtime kind of a field value, used in type-mismatch reporting.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// UTF-8 text.
    Text,
    /// Boolean.
    Boolean,
    /// Number.
    Number,
    /// Timestamp.
    Timestamp,
    /// List.
    List,
    /// Nested map.
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Timestamp => "timestamp",
            Self::List => "list",
            Self::Map => "map",
        };
        f.write_str(label)
    }
}

// ============================================================================
// SECTION: Documents
// ============================================================================

/// A document payload: an ordered map of named field values.
///
/// Both candidate payloads (create/update) and existing documents share this
/// shape. Iteration order is the field names' lexicographic order, which
/// keeps validation error selection deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    /// Named field values.
    fields: BTreeMap<FieldName, FieldValue>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Inserts a field value, replacing any existing value for the name.
    pub fn insert(&mut self, name: impl Into<FieldName>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style insertion for fixture construction.
    #[must_use]
    pub fn with(mut self, name: impl Into<FieldName>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value of a field when present.
    #[must_use]
    pub fn get(&self, name: &FieldName) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns true when the document contains the field.
    #[must_use]
    pub fn contains(&self, name: &FieldName) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of fields in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &FieldValue)> {
        self.fields.iter()
    }

    /// Iterates over the field names in lexicographic order.
    pub fn field_names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.keys()
    }
}

impl FromIterator<(FieldName, FieldValue)> for Document {
    fn from_iter<I: IntoIterator<Item = (FieldName, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
