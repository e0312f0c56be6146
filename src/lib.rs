// src/lib.rs

//! Cookbook catalog
//!
//! Stores ingredients (a name and a cook time) and recipes (a name and a
//! list of required items), and works out what a recipe actually takes:
//! the flat list of base ingredients behind any nesting of sub-recipes,
//! and the total cook time.
//!
//! # Architecture
//!
//! - [`catalog`]: entry types, the in-memory store and registration rules
//! - [`resolver`]: recursive expansion of a recipe into base ingredients
//! - [`summary`]: cook time and ingredient list for a recipe
//! - [`loader`]: cookbook files (JSON/TOML) holding batches of entries
//! - [`db`]: SQLite persistence used by the CLI
//!
//! # Example
//!
//! ```
//! use cookbook::{CatalogStore, Ingredient, Recipe, RequiredItem, register, summarize};
//!
//! let mut store = CatalogStore::new();
//! register(Ingredient::new("egg", 5.0).into(), &mut store)?;
//! register(Ingredient::new("flour", 2.0).into(), &mut store)?;
//! register(
//!     Recipe::new(
//!         "batter",
//!         vec![RequiredItem::new("egg", 2.0), RequiredItem::new("flour", 1.0)],
//!     )
//!     .into(),
//!     &mut store,
//! )?;
//!
//! let summary = summarize("batter", &store)?;
//! assert_eq!(summary.cook_time, 12.0);
//! # Ok::<(), cookbook::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod db;
mod error;
pub mod loader;
pub mod resolver;
pub mod summary;

pub use catalog::{
    CatalogStore, CookbookEntry, EntryKind, Ingredient, Recipe, RequiredItem, SharedCatalog,
    register, validate,
};
pub use config::CookbookConfig;
pub use error::{Error, ErrorKind, Result};
pub use loader::{CookbookFormat, parse_entries, parse_entries_file, register_all};
pub use resolver::{ResolvedIngredientTable, resolve};
pub use summary::{IngredientAmount, Summary, build_summary, summarize};
