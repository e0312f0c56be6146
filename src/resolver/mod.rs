// src/resolver/mod.rs

//! Ingredient resolution
//!
//! Expands a recipe's required-item tree into a flat table of base
//! ingredients. Each required item is looked up in the catalog:
//!
//! - an ingredient contributes its quantity directly,
//! - a recipe is expanded recursively and every ingredient it needs is
//!   scaled by the quantity the sub-recipe was required at,
//! - anything else fails the whole resolution.
//!
//! Ingredients reachable through several paths accumulate. A failed
//! resolution never yields a partial table.
//!
//! # Cycles
//!
//! The names of the recipes currently being expanded are kept on a stack.
//! A recipe that shows up again on that stack requires itself, and the walk
//! stops with [`Error::CyclicReference`] carrying the offending path.

mod table;

pub use table::ResolvedIngredientTable;

use crate::catalog::{CatalogStore, Recipe};
use crate::error::{Error, Result};
use tracing::debug;

/// Resolve a recipe into the base ingredients it needs
///
/// Read-only with respect to `store`.
pub fn resolve(recipe: &Recipe, store: &CatalogStore) -> Result<ResolvedIngredientTable> {
    let mut active = Vec::new();
    expand(recipe, store, &mut active)
}

fn expand(
    recipe: &Recipe,
    store: &CatalogStore,
    active: &mut Vec<String>,
) -> Result<ResolvedIngredientTable> {
    if let Some(start) = active.iter().position(|name| *name == recipe.name) {
        let mut cycle = active[start..].to_vec();
        cycle.push(recipe.name.clone());
        return Err(Error::CyclicReference(cycle));
    }

    active.push(recipe.name.clone());
    let result = expand_items(recipe, store, active);
    active.pop();
    result
}

fn expand_items(
    recipe: &Recipe,
    store: &CatalogStore,
    active: &mut Vec<String>,
) -> Result<ResolvedIngredientTable> {
    let mut table = ResolvedIngredientTable::new();

    for item in &recipe.required_items {
        if store.get_ingredient(&item.name).is_some() {
            table.add(&item.name, item.quantity);
        } else if let Some(sub_recipe) = store.get_recipe(&item.name) {
            debug!(
                "Expanding '{}' x{} within '{}'",
                sub_recipe.name, item.quantity, recipe.name
            );
            let sub_table = expand(sub_recipe, store, active)?;
            table.merge_scaled(&sub_table, item.quantity);
        } else {
            return Err(Error::UnresolvableReference {
                recipe: recipe.name.clone(),
                item: item.name.clone(),
            });
        }
    }

    debug!(
        "Resolved '{}' to {} base ingredient(s)",
        recipe.name,
        table.len()
    );
    Ok(table)
}
