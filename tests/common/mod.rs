// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use cookbook::{CatalogStore, CookbookEntry, Ingredient, Recipe, RequiredItem, db, register};
use tempfile::TempDir;

/// Build a recipe entry from (name, quantity) pairs
pub fn recipe(name: &str, items: &[(&str, f64)]) -> CookbookEntry {
    Recipe::new(
        name,
        items
            .iter()
            .map(|(item, quantity)| RequiredItem::new(*item, *quantity))
            .collect(),
    )
    .into()
}

pub fn ingredient(name: &str, cook_time: f64) -> CookbookEntry {
    Ingredient::new(name, cook_time).into()
}

/// Catalog with egg, flour and batter registered (scenario A)
pub fn batter_store() -> CatalogStore {
    let mut store = CatalogStore::new();
    register(ingredient("egg", 5.0), &mut store).unwrap();
    register(ingredient("flour", 2.0), &mut store).unwrap();
    register(recipe("batter", &[("egg", 2.0), ("flour", 1.0)]), &mut store).unwrap();
    store
}

/// Create an initialized, empty catalog database.
///
/// Returns (TempDir, db_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_test_db() -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("cookbook.db")
        .to_str()
        .unwrap()
        .to_string();

    db::init(&db_path).unwrap();
    (temp_dir, db_path)
}
