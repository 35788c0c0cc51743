// crates/doc-gate-core/src/runtime/store.rs
// ============================================================================
// Module: Doc Gate In-Memory Store
// Description: Simple in-memory document store for tests and examples.
// Purpose: Provide a deterministic store implementation without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides a simple in-memory implementation of [`DataStore`]
//! for tests and local demos. It is not intended for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::identifiers::DocumentPath;
use crate::core::value::Document;
use crate::interfaces::DataStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory document store for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDataStore {
    /// Document map protected by a mutex, keyed by rendered path.
    documents: Arc<Mutex<BTreeMap<String, Document>>>,
}

impl InMemoryDataStore {
    /// Creates a new in-memory document store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    /// Stores a document at the given path, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store mutex is poisoned.
    pub fn set(&self, path: &DocumentPath, document: Document) -> Result<(), StoreError> {
        self.documents
            .lock()
            .map_err(|_| StoreError::Store("document store mutex poisoned".to_string()))?
            .insert(path.to_string(), document);
        Ok(())
    }

    /// Removes the document at the given path when present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store mutex is poisoned.
    pub fn remove(&self, path: &DocumentPath) -> Result<(), StoreError> {
        self.documents
            .lock()
            .map_err(|_| StoreError::Store("document store mutex poisoned".to_string()))?
            .remove(&path.to_string());
        Ok(())
    }

    /// Removes every stored document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store mutex is poisoned.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.documents
            .lock()
            .map_err(|_| StoreError::Store("document store mutex poisoned".to_string()))?
            .clear();
        Ok(())
    }
}

impl DataStore for InMemoryDataStore {
    fn get(&self, path: &DocumentPath) -> Result<Option<Document>, StoreError> {
        let guard = self
            .documents
            .lock()
            .map_err(|_| StoreError::Store("document store mutex poisoned".to_string()))?;
        Ok(guard.get(&path.to_string()).cloned())
    }
}
