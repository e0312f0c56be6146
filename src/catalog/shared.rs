// src/catalog/shared.rs

//! Thread-safe catalog handle
//!
//! Registrations hold the write lock for the whole validate-and-commit
//! step; summaries hold the read lock for the whole resolution. A summary
//! therefore sees the catalog either entirely before or entirely after any
//! given registration.

use crate::catalog::entry::CookbookEntry;
use crate::catalog::registrar;
use crate::catalog::store::CatalogStore;
use crate::error::Result;
use crate::summary::{self, Summary};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a catalog shared between threads
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<CatalogStore>>,
}

impl SharedCatalog {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Register an entry under the write lock
    pub fn register(&self, entry: CookbookEntry) -> Result<()> {
        let mut store = self.inner.write();
        registrar::register(entry, &mut store)
    }

    /// Summarize a recipe under the read lock
    pub fn summarize(&self, name: &str) -> Result<Summary> {
        let store = self.inner.read();
        summary::summarize(name, &store)
    }

    pub fn has(&self, name: &str) -> bool {
        self.inner.read().has(name)
    }

    /// Run a read-only closure against a consistent view of the catalog
    pub fn with_store<T>(&self, f: impl FnOnce(&CatalogStore) -> T) -> T {
        f(&self.inner.read())
    }
}
