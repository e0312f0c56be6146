// src/db/schema.rs

//! Database schema definitions and migrations for the catalog
//!
//! Schema changes are applied in order and recorded in `schema_version`,
//! so opening an older database brings it up to date.

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the schema version tracking table
fn init_schema_version(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    init_schema_version(conn)?;

    // An empty table means a fresh database; any other failure is real
    let version = conn
        .query_row(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

/// Apply all pending migrations to bring the database up to date
pub fn migrate(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;
    debug!("Current schema version: {}", current_version);

    if current_version >= SCHEMA_VERSION {
        return Ok(());
    }

    for version in (current_version + 1)..=SCHEMA_VERSION {
        info!("Applying migration to version {}", version);
        apply_migration(conn, version)?;
        set_schema_version(conn, version)?;
    }

    info!("Schema migration complete. Now at version {}", SCHEMA_VERSION);
    Ok(())
}

fn apply_migration(conn: &Connection, version: i32) -> Result<()> {
    match version {
        1 => migrate_v1(conn),
        _ => unreachable!("no migration defined for schema version {}", version),
    }
}

/// Initial schema - Version 1
///
/// - entries: one row per ingredient or recipe; the primary key keeps names
///   unique across both kinds
/// - required_items: ordered (name, quantity) pairs of each recipe
fn migrate_v1(conn: &Connection) -> Result<()> {
    debug!("Creating schema version 1");

    conn.execute_batch(
        "
        CREATE TABLE entries (
            name TEXT PRIMARY KEY,
            kind TEXT NOT NULL CHECK(kind IN ('ingredient', 'recipe')),
            cook_time REAL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK((kind = 'ingredient') = (cook_time IS NOT NULL))
        );

        CREATE INDEX idx_entries_kind ON entries(kind);

        -- Item names are not foreign keys: recipes may reference entries
        -- that are registered later, or never
        CREATE TABLE required_items (
            recipe TEXT NOT NULL,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            quantity REAL NOT NULL CHECK(quantity >= 0),
            PRIMARY KEY (recipe, name),
            UNIQUE (recipe, position),
            FOREIGN KEY (recipe) REFERENCES entries(name) ON DELETE CASCADE
        );
        ",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_fresh_database() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);

        migrate(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        migrate(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_unreadable_version_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE schema_version (version TEXT, applied_at TEXT);
             INSERT INTO schema_version (version) VALUES ('one');",
        )
        .unwrap();

        assert!(matches!(
            get_schema_version(&conn),
            Err(crate::error::Error::DatabaseError(_))
        ));

        // Nothing gets migrated on top of a version we could not read
        assert!(migrate(&conn).is_err());
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'entries'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 0);
    }

    #[test]
    fn test_name_unique_across_kinds() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();

        conn.execute(
            "INSERT INTO entries (name, kind, cook_time) VALUES ('egg', 'ingredient', 5)",
            [],
        )
        .unwrap();
        let result = conn.execute(
            "INSERT INTO entries (name, kind) VALUES ('egg', 'recipe')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_ingredient_requires_cook_time() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO entries (name, kind) VALUES ('egg', 'ingredient')",
            [],
        );
        assert!(result.is_err());
    }
}
