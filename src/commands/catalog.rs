// src/commands/catalog.rs

//! Catalog commands - create the database and register entries

use anyhow::{Context, Result};
use cookbook::{CookbookEntry, Ingredient, Recipe, RequiredItem, db, loader};
use std::path::Path;
use tracing::info;

/// Initialize the catalog database
pub fn cmd_init(db_path: &str) -> Result<()> {
    db::init(db_path)
        .with_context(|| format!("Failed to initialize catalog database at {}", db_path))?;
    println!("Catalog initialized at: {}", db_path);
    Ok(())
}

/// Register a single ingredient
pub fn cmd_ingredient(db_path: &str, name: &str, cook_time: f64) -> Result<()> {
    register_one(db_path, Ingredient::new(name, cook_time).into())?;
    println!("Registered ingredient '{}' (cook time {})", name, cook_time);
    Ok(())
}

/// Register a single recipe
pub fn cmd_recipe(db_path: &str, name: &str, items: Vec<RequiredItem>) -> Result<()> {
    let count = items.len();
    register_one(db_path, Recipe::new(name, items).into())?;
    println!("Registered recipe '{}' with {} required item(s)", name, count);
    Ok(())
}

fn register_one(db_path: &str, entry: CookbookEntry) -> Result<()> {
    let mut conn = db::open(db_path)
        .with_context(|| format!("Failed to open catalog database at {}", db_path))?;
    let name = entry.name().to_string();
    db::register_entries(&mut conn, vec![entry])
        .with_context(|| format!("Failed to register '{}'", name))?;
    Ok(())
}

/// Register every entry of a cookbook file
///
/// # Arguments
/// * `db_path` - Path to the catalog database
/// * `path` - JSON or TOML cookbook file
/// * `dry_run` - Check the entries against the catalog without writing
pub fn cmd_import(db_path: &str, path: &str, dry_run: bool) -> Result<()> {
    let path = Path::new(path);
    println!("Reading cookbook: {}", path.display());
    let entries = loader::parse_entries_file(path)
        .with_context(|| format!("Failed to read cookbook: {}", path.display()))?;

    if entries.is_empty() {
        println!("No entries found");
        return Ok(());
    }

    if dry_run {
        let mut store = db::open_catalog(db_path)
            .with_context(|| format!("Failed to load catalog from {}", db_path))?;
        let count = loader::register_all(entries, &mut store)
            .with_context(|| "Cookbook validation failed")?;
        println!("[OK] {} entry(s) would be registered", count);
        return Ok(());
    }

    let mut conn = db::open(db_path)
        .with_context(|| format!("Failed to open catalog database at {}", db_path))?;
    let count = db::register_entries(&mut conn, entries)
        .with_context(|| format!("Failed to import {}", path.display()))?;

    info!("Imported {} entries from {}", count, path.display());
    println!("[COMPLETE] Registered {} entry(s)", count);
    Ok(())
}
