// src/db/models.rs

//! Row mapping between catalog entries and the `entries` /
//! `required_items` tables

use crate::catalog::{CatalogStore, CookbookEntry, EntryKind, Ingredient, Recipe, RequiredItem};
use crate::error::{Error, Result};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::HashMap;

/// Raw `entries` row
struct EntryRow {
    name: String,
    kind: EntryKind,
    cook_time: Option<f64>,
}

impl EntryRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let kind: String = row.get(1)?;
        let kind = kind.parse::<EntryKind>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                Box::new(Error::ParseError(e)),
            )
        })?;

        Ok(Self {
            name: row.get(0)?,
            kind,
            cook_time: row.get(2)?,
        })
    }

    fn into_entry(self, items: Vec<RequiredItem>) -> CookbookEntry {
        match self.kind {
            EntryKind::Ingredient => {
                CookbookEntry::Ingredient(Ingredient::new(self.name, self.cook_time.unwrap_or(0.0)))
            }
            EntryKind::Recipe => CookbookEntry::Recipe(Recipe::new(self.name, items)),
        }
    }
}

/// Insert an entry and, for recipes, its required items
///
/// Callers are expected to have validated the entry; the primary key still
/// rejects a name that is already taken.
pub fn insert_entry(conn: &Connection, entry: &CookbookEntry) -> Result<()> {
    match entry {
        CookbookEntry::Ingredient(ingredient) => {
            conn.execute(
                "INSERT INTO entries (name, kind, cook_time) VALUES (?1, ?2, ?3)",
                params![&ingredient.name, EntryKind::Ingredient.as_str(), ingredient.cook_time],
            )?;
        }
        CookbookEntry::Recipe(recipe) => {
            conn.execute(
                "INSERT INTO entries (name, kind) VALUES (?1, ?2)",
                params![&recipe.name, EntryKind::Recipe.as_str()],
            )?;

            let mut stmt = conn.prepare(
                "INSERT INTO required_items (recipe, position, name, quantity)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (position, item) in recipe.required_items.iter().enumerate() {
                stmt.execute(params![&recipe.name, position as i64, &item.name, item.quantity])?;
            }
        }
    }
    Ok(())
}

/// Required items of one recipe, in declaration order
fn required_items(conn: &Connection, recipe: &str) -> Result<Vec<RequiredItem>> {
    let mut stmt = conn.prepare(
        "SELECT name, quantity FROM required_items WHERE recipe = ?1 ORDER BY position",
    )?;

    let items = stmt
        .query_map([recipe], |row| Ok(RequiredItem::new(row.get::<_, String>(0)?, row.get(1)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(items)
}

/// Required items of every recipe, keyed by recipe name
fn all_required_items(conn: &Connection) -> Result<HashMap<String, Vec<RequiredItem>>> {
    let mut stmt = conn.prepare(
        "SELECT recipe, name, quantity FROM required_items ORDER BY recipe, position",
    )?;

    let mut items: HashMap<String, Vec<RequiredItem>> = HashMap::new();
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            RequiredItem::new(row.get::<_, String>(1)?, row.get(2)?),
        ))
    })?;
    for row in rows {
        let (recipe, item) = row?;
        items.entry(recipe).or_default().push(item);
    }

    Ok(items)
}

/// Find one entry by name
pub fn find_entry(conn: &Connection, name: &str) -> Result<Option<CookbookEntry>> {
    let mut stmt = conn.prepare("SELECT name, kind, cook_time FROM entries WHERE name = ?1")?;
    let row = stmt.query_row([name], EntryRow::from_row).optional()?;

    match row {
        Some(row) if row.kind == EntryKind::Recipe => {
            let items = required_items(conn, &row.name)?;
            Ok(Some(row.into_entry(items)))
        }
        Some(row) => Ok(Some(row.into_entry(Vec::new()))),
        None => Ok(None),
    }
}

/// List entries in name order, optionally of one kind only
pub fn list_entries(conn: &Connection, kind: Option<EntryKind>) -> Result<Vec<CookbookEntry>> {
    let mut stmt = conn.prepare(
        "SELECT name, kind, cook_time FROM entries
         WHERE ?1 IS NULL OR kind = ?1
         ORDER BY name",
    )?;
    let rows = stmt
        .query_map([kind.map(|k| k.as_str())], EntryRow::from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut items = all_required_items(conn)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let recipe_items = items.remove(&row.name).unwrap_or_default();
            row.into_entry(recipe_items)
        })
        .collect())
}

/// Load the whole catalog into memory
pub fn load_catalog(conn: &Connection) -> Result<CatalogStore> {
    let mut store = CatalogStore::new();
    for entry in list_entries(conn, None)? {
        match entry {
            CookbookEntry::Ingredient(ingredient) => store.put_ingredient(ingredient)?,
            CookbookEntry::Recipe(recipe) => store.put_recipe(recipe)?,
        }
    }
    Ok(store)
}
