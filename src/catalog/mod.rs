// src/catalog/mod.rs

//! The ingredient and recipe catalog
//!
//! - [`entry`]: ingredient, recipe and tagged entry types
//! - [`store`]: the in-memory name -> entity mapping
//! - [`registrar`]: validation and commit of new entries
//! - [`shared`]: a lock-protected handle for concurrent callers
//!
//! Entries are immutable once registered. There is no update or delete.

pub mod entry;
pub mod registrar;
pub mod shared;
pub mod store;

pub use entry::{CookbookEntry, EntryKind, Ingredient, Recipe, RequiredItem};
pub use registrar::{register, validate};
pub use shared::SharedCatalog;
pub use store::CatalogStore;
