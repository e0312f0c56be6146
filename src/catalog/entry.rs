// src/catalog/entry.rs

//! Catalog entity types
//!
//! Field names follow the wire format used by cookbook files and summaries:
//!
//! ```json
//! {"type": "ingredient", "name": "egg", "cookTime": 5}
//! {"type": "recipe", "name": "batter", "requiredItems": [{"name": "egg", "quantity": 2}]}
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A leaf entity with a fixed preparation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, cook_time: f64) -> Self {
        Self {
            name: name.into(),
            cook_time,
        }
    }
}

/// A reference from a recipe to another catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: f64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A composite entity built from ingredients and other recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub required_items: Vec<RequiredItem>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Self {
            name: name.into(),
            required_items,
        }
    }

    /// Find the first required item name that appears more than once
    pub fn duplicate_item(&self) -> Option<&str> {
        self.required_items.iter().enumerate().find_map(|(i, item)| {
            self.required_items[..i]
                .iter()
                .any(|earlier| earlier.name == item.name)
                .then_some(item.name.as_str())
        })
    }
}

/// Discriminant of a [`CookbookEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Ingredient,
    Recipe,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Ingredient => "ingredient",
            EntryKind::Recipe => "recipe",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredient" => Ok(EntryKind::Ingredient),
            "recipe" => Ok(EntryKind::Recipe),
            _ => Err(format!("Unknown entry kind: {}", s)),
        }
    }
}

/// An ingredient or a recipe, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CookbookEntry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl CookbookEntry {
    /// Catalog key of this entry
    pub fn name(&self) -> &str {
        match self {
            CookbookEntry::Ingredient(ingredient) => &ingredient.name,
            CookbookEntry::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            CookbookEntry::Ingredient(_) => EntryKind::Ingredient,
            CookbookEntry::Recipe(_) => EntryKind::Recipe,
        }
    }
}

impl From<Ingredient> for CookbookEntry {
    fn from(ingredient: Ingredient) -> Self {
        CookbookEntry::Ingredient(ingredient)
    }
}

impl From<Recipe> for CookbookEntry {
    fn from(recipe: Recipe) -> Self {
        CookbookEntry::Recipe(recipe)
    }
}
