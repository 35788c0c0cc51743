// crates/doc-gate-config/src/table.rs
// ============================================================================
// Module: Schema Table Configuration
// Description: TOML schema-table loading, validation, and compilation.
// Purpose: Provide strict, fail-closed parsing of collection schema tables.
// Dependencies: doc-gate-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! A schema table is loaded from a TOML file with strict size limits and
//! validated before use: field whitelists must be internally consistent and
//! every cross-reference (types, updatable sets, ownership fields) must point
//! at a declared field. Missing or invalid configuration fails closed; a
//! validated table compiles into the core [`SchemaRegistry`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use doc_gate_core::CollectionSchema;
use doc_gate_core::FieldType;
use doc_gate_core::OwnershipRule;
use doc_gate_core::SchemaRegistry;
use doc_gate_core::StructSchema;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::policy::PolicyExpr;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default schema table filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "doc-gate.toml";
/// Environment variable used to override the schema table path.
const CONFIG_ENV_VAR: &str = "DOC_GATE_CONFIG";
/// Maximum schema table file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Schema table configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Top-level schema table configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaTableConfig {
    /// Collection entries keyed by collection name.
    #[serde(default)]
    pub collections: BTreeMap<String, CollectionConfig>,
}

/// Configuration for a single collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    /// Fields required on create.
    #[serde(default)]
    pub required: Vec<String>,
    /// Fields allowed but not required.
    #[serde(default)]
    pub optional: Vec<String>,
    /// Declared types for fields; undeclared fields default to text.
    #[serde(default)]
    pub types: BTreeMap<String, FieldTypeConfig>,
    /// Explicit updatable whitelist, overriding the derived set.
    #[serde(default)]
    pub updatable: Option<Vec<String>>,
    /// Fields immutable after creation, removed from the derived set.
    #[serde(default)]
    pub create_only: Vec<String>,
    /// Field holding the owner's uid, when the collection has ownership.
    #[serde(default)]
    pub ownership_field: Option<String>,
    /// Policy for Get/List; defaults to nobody.
    #[serde(default)]
    pub read: PolicyExpr,
    /// Policy for Create; defaults to nobody.
    #[serde(default)]
    pub create: PolicyExpr,
    /// Policy for Update; defaults to nobody.
    #[serde(default)]
    pub update: PolicyExpr,
    /// Policy for Delete; defaults to nobody.
    #[serde(default)]
    pub delete: PolicyExpr,
}

/// Declared field type in configuration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTypeConfig {
    /// UTF-8 text.
    Text,
    /// Boolean.
    Boolean,
    /// Number.
    Number,
    /// Caller-supplied timestamp.
    Timestamp,
    /// List of text values.
    TextList,
    /// List of nested maps with declared element field types.
    StructList(BTreeMap<String, FieldTypeConfig>),
}

impl FieldTypeConfig {
    /// Compiles the configuration form into the core field type.
    #[must_use]
    pub fn compile(&self) -> FieldType {
        match self {
            Self::Text => FieldType::Text,
            Self::Boolean => FieldType::Boolean,
            Self::Number => FieldType::Number,
            Self::Timestamp => FieldType::Timestamp,
            Self::TextList => FieldType::TextList,
            Self::StructList(fields) => {
                if fields.is_empty() {
                    FieldType::StructList(None)
                } else {
                    let field_types = fields
                        .iter()
                        .map(|(name, ty)| (name.as_str().into(), ty.compile()))
                        .collect();
                    FieldType::StructList(Some(StructSchema {
                        field_types,
                    }))
                }
            }
        }
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl SchemaTableConfig {
    /// Loads a schema table from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading, parsing, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path);
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("schema table exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|err| ConfigError::Parse(format!("schema table is not UTF-8: {err}")))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates a schema table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every collection entry for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, collection) in &self.collections {
            if name.is_empty() {
                return Err(ConfigError::Invalid("collection name must be non-empty".to_string()));
            }
            collection
                .validate()
                .map_err(|err| ConfigError::Invalid(format!("collections[{name}]: {err}")))?;
        }
        Ok(())
    }

    /// Compiles a validated table into the core schema registry.
    #[must_use]
    pub fn compile(&self) -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        for (name, collection) in &self.collections {
            registry.insert(name.as_str(), collection.compile());
        }
        registry
    }
}

impl CollectionConfig {
    /// Validates cross-references between the field sets of one entry.
    fn validate(&self) -> Result<(), String> {
        let mut allowed: BTreeSet<&str> = BTreeSet::new();
        for field in self.required.iter().chain(&self.optional) {
            if field.is_empty() {
                return Err("field names must be non-empty".to_string());
            }
            if !allowed.insert(field.as_str()) {
                return Err(format!("field {field} is declared more than once"));
            }
        }
        if self.updatable.is_some() && !self.create_only.is_empty() {
            return Err("updatable and create_only are mutually exclusive".to_string());
        }
        if let Some(updatable) = &self.updatable {
            for field in updatable {
                if !allowed.contains(field.as_str()) {
                    return Err(format!("updatable field {field} is not declared"));
                }
            }
        }
        for field in &self.create_only {
            if !allowed.contains(field.as_str()) {
                return Err(format!("create_only field {field} is not declared"));
            }
        }
        for field in self.types.keys() {
            if !allowed.contains(field.as_str()) {
                return Err(format!("typed field {field} is not declared"));
            }
        }
        if let Some(field) = &self.ownership_field
            && !allowed.contains(field.as_str())
        {
            return Err(format!("ownership field {field} is not declared"));
        }
        Ok(())
    }

    /// Compiles one entry into a core collection schema.
    fn compile(&self) -> CollectionSchema {
        let mut builder = CollectionSchema::builder();
        for field in &self.required {
            builder = builder.required_field(field, self.field_type(field));
        }
        for field in &self.optional {
            builder = builder.optional_field(field, self.field_type(field));
        }
        if let Some(updatable) = &self.updatable {
            let names: Vec<&str> = updatable.iter().map(String::as_str).collect();
            builder = builder.updatable_only(&names);
        } else if !self.create_only.is_empty() {
            let names: Vec<&str> = self.create_only.iter().map(String::as_str).collect();
            builder = builder.create_only(&names);
        }
        if let Some(field) = &self.ownership_field {
            builder = builder.ownership(OwnershipRule::field(field.as_str()));
        }
        builder
            .read(self.read.compile())
            .create(self.create.compile())
            .update(self.update.compile())
            .delete(self.delete.compile())
            .build()
    }

    /// Returns the declared type for a field, defaulting to text.
    fn field_type(&self, field: &str) -> FieldType {
        self.types.get(field).map_or(FieldType::Text, FieldTypeConfig::compile)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the schema table path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }
    if let Ok(from_env) = env::var(CONFIG_ENV_VAR)
        && !from_env.is_empty()
    {
        return PathBuf::from(from_env);
    }
    PathBuf::from(DEFAULT_CONFIG_NAME)
}
