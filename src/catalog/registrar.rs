// src/catalog/registrar.rs

//! Entry registration
//!
//! All checks run before the store is touched, so a rejected entry leaves
//! the catalog exactly as it was.

use crate::catalog::entry::CookbookEntry;
use crate::catalog::store::CatalogStore;
use crate::error::{Error, Result};
use tracing::{info, warn};

/// Check an entry against the catalog without committing it
pub fn validate(entry: &CookbookEntry, store: &CatalogStore) -> Result<()> {
    check_shape(entry)?;

    if store.has(entry.name()) {
        return Err(Error::DuplicateName(entry.name().to_string()));
    }

    if let CookbookEntry::Recipe(recipe) = entry {
        if let Some(item) = recipe.duplicate_item() {
            return Err(Error::DuplicateRequiredItem {
                recipe: recipe.name.clone(),
                item: item.to_string(),
            });
        }
    }

    Ok(())
}

/// Validate an entry and add it to the catalog
pub fn register(entry: CookbookEntry, store: &mut CatalogStore) -> Result<()> {
    if let Err(e) = validate(&entry, store) {
        warn!("Rejected {} '{}': {}", entry.kind(), entry.name(), e);
        return Err(e);
    }

    info!("Registering {} '{}'", entry.kind(), entry.name());
    match entry {
        CookbookEntry::Ingredient(ingredient) => store.put_ingredient(ingredient),
        CookbookEntry::Recipe(recipe) => store.put_recipe(recipe),
    }
}

/// Reject amounts that are negative or not finite
fn check_shape(entry: &CookbookEntry) -> Result<()> {
    match entry {
        CookbookEntry::Ingredient(ingredient) => {
            if !is_valid_amount(ingredient.cook_time) {
                return Err(Error::InvalidEntry(format!(
                    "Ingredient '{}' has invalid cookTime {}",
                    ingredient.name, ingredient.cook_time
                )));
            }
        }
        CookbookEntry::Recipe(recipe) => {
            for item in &recipe.required_items {
                if !is_valid_amount(item.quantity) {
                    return Err(Error::InvalidEntry(format!(
                        "Recipe '{}' requires '{}' with invalid quantity {}",
                        recipe.name, item.name, item.quantity
                    )));
                }
            }
        }
    }

    Ok(())
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::{Ingredient, Recipe, RequiredItem};

    fn recipe(name: &str, items: &[(&str, f64)]) -> CookbookEntry {
        Recipe::new(
            name,
            items
                .iter()
                .map(|(n, q)| RequiredItem::new(*n, *q))
                .collect(),
        )
        .into()
    }

    #[test]
    fn test_register_ingredient_and_recipe() {
        let mut store = CatalogStore::new();
        register(Ingredient::new("egg", 5.0).into(), &mut store).unwrap();
        register(recipe("omelette", &[("egg", 3.0)]), &mut store).unwrap();

        assert!(store.get_ingredient("egg").is_some());
        assert!(store.get_recipe("omelette").is_some());
    }

    #[test]
    fn test_duplicate_name_across_kinds() {
        let mut store = CatalogStore::new();
        register(Ingredient::new("egg", 5.0).into(), &mut store).unwrap();

        let result = register(recipe("egg", &[]), &mut store);
        assert!(matches!(result, Err(Error::DuplicateName(name)) if name == "egg"));

        let result = register(Ingredient::new("egg", 1.0).into(), &mut store);
        assert!(matches!(result, Err(Error::DuplicateName(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_required_item_leaves_store_unchanged() {
        let mut store = CatalogStore::new();
        register(Ingredient::new("egg", 5.0).into(), &mut store).unwrap();

        let result = register(recipe("scramble", &[("egg", 1.0), ("egg", 2.0)]), &mut store);
        match result {
            Err(Error::DuplicateRequiredItem { recipe, item }) => {
                assert_eq!(recipe, "scramble");
                assert_eq!(item, "egg");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!store.has("scramble"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_recipe_may_reference_unregistered_items() {
        // References are resolved lazily at summary time
        let mut store = CatalogStore::new();
        register(recipe("mystery", &[("unicorn-tears", 1.0)]), &mut store).unwrap();
        assert!(store.has("mystery"));
    }

    #[test]
    fn test_invalid_shapes() {
        let mut store = CatalogStore::new();

        let result = register(Ingredient::new("egg", -1.0).into(), &mut store);
        assert!(matches!(result, Err(Error::InvalidEntry(_))));

        let result = register(Ingredient::new("egg", f64::NAN).into(), &mut store);
        assert!(matches!(result, Err(Error::InvalidEntry(_))));

        let result = register(recipe("cake", &[("flour", -2.0)]), &mut store);
        assert!(matches!(result, Err(Error::InvalidEntry(_))));

        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_names_are_ordinary_names() {
        let mut store = CatalogStore::new();
        register(Ingredient::new("", 1.0).into(), &mut store).unwrap();
        register(recipe("r", &[("", 1.0), (" ", 2.0)]), &mut store).unwrap();
        assert_eq!(store.len(), 2);

        // Still subject to uniqueness
        let result = register(recipe("", &[]), &mut store);
        assert!(matches!(result, Err(Error::DuplicateName(name)) if name.is_empty()));
    }

    #[test]
    fn test_zero_amounts_allowed() {
        let mut store = CatalogStore::new();
        register(Ingredient::new("water", 0.0).into(), &mut store).unwrap();
        register(recipe("ice", &[("water", 0.0)]), &mut store).unwrap();
        assert_eq!(store.len(), 2);
    }
}
