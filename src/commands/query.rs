// src/commands/query.rs

//! Query commands - summaries, listings and single entries

use anyhow::{Context, Result};
use cookbook::{CookbookEntry, EntryKind, Summary, db, summarize};

/// Print the summary of a recipe
pub fn cmd_summarize(db_path: &str, name: &str, json: bool) -> Result<()> {
    let store = db::open_catalog(db_path)
        .with_context(|| format!("Failed to load catalog from {}", db_path))?;

    let summary = summarize(name, &store)
        .with_context(|| format!("Cannot summarize '{}'", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!("Recipe: {}", summary.name);
    println!("Total cook time: {}", summary.cook_time);

    if summary.ingredients.is_empty() {
        println!("Ingredients: (none)");
        return;
    }

    let width = summary
        .ingredients
        .iter()
        .map(|amount| amount.name.len())
        .max()
        .unwrap_or(0);

    println!("Ingredients:");
    for amount in &summary.ingredients {
        println!("  {:<width$}  {}", amount.name, amount.quantity, width = width);
    }
}

/// List catalog entries
pub fn cmd_list(db_path: &str, kind: Option<EntryKind>, json: bool) -> Result<()> {
    let conn = db::open(db_path)
        .with_context(|| format!("Failed to open catalog database at {}", db_path))?;
    let entries = db::list_entries(&conn, kind)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No entries");
        return Ok(());
    }

    for entry in &entries {
        match entry {
            CookbookEntry::Ingredient(ingredient) => {
                println!("{} (ingredient, cook time {})", ingredient.name, ingredient.cook_time);
            }
            CookbookEntry::Recipe(recipe) => {
                println!(
                    "{} (recipe, {} required item(s))",
                    recipe.name,
                    recipe.required_items.len()
                );
            }
        }
    }
    println!("\nTotal: {} entry(s)", entries.len());
    Ok(())
}

/// Show a single catalog entry
pub fn cmd_show(db_path: &str, name: &str, json: bool) -> Result<()> {
    let conn = db::open(db_path)
        .with_context(|| format!("Failed to open catalog database at {}", db_path))?;
    let entry = db::find_entry(&conn, name)?
        .ok_or_else(|| anyhow::anyhow!("'{}' not found", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    match entry {
        CookbookEntry::Ingredient(ingredient) => {
            println!("Ingredient: {}", ingredient.name);
            println!("Cook time: {}", ingredient.cook_time);
        }
        CookbookEntry::Recipe(recipe) => {
            println!("Recipe: {}", recipe.name);
            if recipe.required_items.is_empty() {
                println!("Required items: (none)");
            } else {
                println!("Required items:");
                for item in &recipe.required_items {
                    println!("  {} x{}", item.name, item.quantity);
                }
            }
        }
    }
    Ok(())
}
