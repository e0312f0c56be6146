// src/loader.rs

//! Cookbook file parsing
//!
//! A cookbook file holds a batch of entries in registration order. Two
//! formats are accepted:
//!
//! ```json
//! [
//!   {"type": "ingredient", "name": "egg", "cookTime": 5},
//!   {"type": "recipe", "name": "batter",
//!    "requiredItems": [{"name": "egg", "quantity": 2}]}
//! ]
//! ```
//!
//! ```toml
//! [[entry]]
//! type = "ingredient"
//! name = "egg"
//! cookTime = 5
//!
//! [[entry]]
//! type = "recipe"
//! name = "batter"
//! requiredItems = [{ name = "egg", quantity = 2 }]
//! ```
//!
//! A JSON file may also contain a single entry object.

use crate::catalog::{CatalogStore, CookbookEntry, registrar};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Cookbook file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookbookFormat {
    Json,
    Toml,
}

impl CookbookFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(CookbookFormat::Json),
            Some("toml") => Some(CookbookFormat::Toml),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct TomlCookbook {
    #[serde(default)]
    entry: Vec<CookbookEntry>,
}

/// Parse cookbook entries from a string in the given format
pub fn parse_entries(content: &str, format: CookbookFormat) -> Result<Vec<CookbookEntry>> {
    match format {
        CookbookFormat::Json => {
            let document: serde_json::Value = serde_json::from_str(content)
                .map_err(|e| Error::ParseError(format!("Invalid cookbook JSON: {}", e)))?;
            match document {
                serde_json::Value::Array(values) => values
                    .into_iter()
                    .enumerate()
                    .map(|(i, value)| {
                        serde_json::from_value(value).map_err(|e| {
                            Error::ParseError(format!("Invalid cookbook entry {}: {}", i + 1, e))
                        })
                    })
                    .collect(),
                serde_json::Value::Object(_) => {
                    let entry = serde_json::from_value(document).map_err(|e| {
                        Error::ParseError(format!("Invalid cookbook entry: {}", e))
                    })?;
                    Ok(vec![entry])
                }
                _ => Err(Error::ParseError(
                    "Cookbook JSON must be an entry object or an array of entries".to_string(),
                )),
            }
        }
        CookbookFormat::Toml => {
            let parsed: TomlCookbook = toml::from_str(content)
                .map_err(|e| Error::ParseError(format!("Invalid cookbook TOML: {}", e)))?;
            Ok(parsed.entry)
        }
    }
}

/// Parse cookbook entries from a file
///
/// Files without a recognized extension are tried as JSON, then TOML.
pub fn parse_entries_file(path: &Path) -> Result<Vec<CookbookEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::IoError(format!("Failed to read cookbook file {}: {}", path.display(), e))
    })?;

    let entries = match CookbookFormat::from_path(path) {
        Some(format) => parse_entries(&content, format)?,
        None => parse_entries(&content, CookbookFormat::Json)
            .or_else(|_| parse_entries(&content, CookbookFormat::Toml))
            .map_err(|_| {
                Error::ParseError(format!(
                    "{} is neither a JSON nor a TOML cookbook",
                    path.display()
                ))
            })?,
    };

    debug!("Parsed {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Register a batch of entries, all or nothing
///
/// Entries are registered in order against a scratch copy of `store`, so
/// later entries may reference earlier ones. The copy replaces `store` only
/// if every entry succeeds.
pub fn register_all(entries: Vec<CookbookEntry>, store: &mut CatalogStore) -> Result<usize> {
    let mut staged = store.clone();
    let count = entries.len();
    for entry in entries {
        registrar::register(entry, &mut staged)?;
    }
    *store = staged;
    Ok(count)
}
