// src/summary.rs

//! Recipe summaries: total cook time and the flat ingredient list

use crate::catalog::{CatalogStore, EntryKind, Recipe};
use crate::error::{Error, Result};
use crate::resolver;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

/// One line of a summary's ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientAmount {
    pub name: String,
    #[serde(serialize_with = "serialize_amount")]
    pub quantity: f64,
}

/// Reportable result of resolving a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    #[serde(serialize_with = "serialize_amount")]
    pub cook_time: f64,
    /// Base ingredients in name order
    pub ingredients: Vec<IngredientAmount>,
}

impl Summary {
    /// Quantity of a base ingredient, if the recipe needs it
    pub fn quantity_of(&self, name: &str) -> Option<f64> {
        self.ingredients
            .iter()
            .find(|amount| amount.name == name)
            .map(|amount| amount.quantity)
    }
}

/// Write whole amounts as integers (`12`, not `12.0`)
fn serialize_amount<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Beyond 2^53 not every integer is representable, keep the float
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Resolve a recipe and total up its cook time
pub fn build_summary(recipe: &Recipe, store: &CatalogStore) -> Result<Summary> {
    let table = resolver::resolve(recipe, store)?;

    let mut cook_time = 0.0;
    let mut ingredients = Vec::with_capacity(table.len());
    for (name, quantity) in table.iter() {
        // The resolver only emits names it found as ingredients
        if let Some(ingredient) = store.get_ingredient(name) {
            cook_time += ingredient.cook_time * quantity;
        }
        ingredients.push(IngredientAmount {
            name: name.to_string(),
            quantity,
        });
    }

    debug!("Summary for '{}': cook time {}", recipe.name, cook_time);
    Ok(Summary {
        name: recipe.name.clone(),
        cook_time,
        ingredients,
    })
}

/// Summarize a recipe by name
///
/// Fails with [`Error::NotARecipe`] for ingredient names and
/// [`Error::NotFound`] for names the catalog does not know.
pub fn summarize(name: &str, store: &CatalogStore) -> Result<Summary> {
    match store.kind_of(name) {
        Some(EntryKind::Recipe) => {
            let recipe = store
                .get_recipe(name)
                .ok_or_else(|| Error::NotFound(name.to_string()))?;
            build_summary(recipe, store)
        }
        Some(EntryKind::Ingredient) => Err(Error::NotARecipe(name.to_string())),
        None => Err(Error::NotFound(name.to_string())),
    }
}
