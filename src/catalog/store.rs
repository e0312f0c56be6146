// src/catalog/store.rs

//! In-memory catalog of ingredients and recipes
//!
//! Two name-keyed maps, one per entry kind. A name present in one map is
//! never present in the other; `put_*` enforces this on its own so the
//! invariant holds even for callers that skip the registrar.

use crate::catalog::entry::{CookbookEntry, EntryKind, Ingredient, Recipe};
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Authoritative name -> entity mapping
#[derive(Debug, Default, Clone)]
pub struct CatalogStore {
    ingredients: BTreeMap<String, Ingredient>,
    recipes: BTreeMap<String, Recipe>,
}

impl CatalogStore {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a name is taken by either kind
    pub fn has(&self, name: &str) -> bool {
        self.ingredients.contains_key(name) || self.recipes.contains_key(name)
    }

    /// Which kind of entry a name refers to, if any
    pub fn kind_of(&self, name: &str) -> Option<EntryKind> {
        if self.ingredients.contains_key(name) {
            Some(EntryKind::Ingredient)
        } else if self.recipes.contains_key(name) {
            Some(EntryKind::Recipe)
        } else {
            None
        }
    }

    pub fn get_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    pub fn get_recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Insert an ingredient, refusing to shadow an existing name
    pub fn put_ingredient(&mut self, ingredient: Ingredient) -> Result<()> {
        if self.has(&ingredient.name) {
            return Err(Error::DuplicateName(ingredient.name));
        }
        self.ingredients.insert(ingredient.name.clone(), ingredient);
        Ok(())
    }

    /// Insert a recipe, refusing to shadow an existing name
    pub fn put_recipe(&mut self, recipe: Recipe) -> Result<()> {
        if self.has(&recipe.name) {
            return Err(Error::DuplicateName(recipe.name));
        }
        self.recipes.insert(recipe.name.clone(), recipe);
        Ok(())
    }

    /// Ingredients in name order
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    /// Recipes in name order
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// All entries, ingredients first, each group in name order
    pub fn entries(&self) -> Vec<CookbookEntry> {
        self.ingredients()
            .cloned()
            .map(CookbookEntry::Ingredient)
            .chain(self.recipes().cloned().map(CookbookEntry::Recipe))
            .collect()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.ingredients.len() + self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.recipes.is_empty()
    }
}
