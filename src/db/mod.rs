// src/db/mod.rs

//! SQLite persistence for the catalog
//!
//! The in-memory [`CatalogStore`] is the unit every operation works on.
//! The database keeps it between CLI invocations: each command loads the
//! catalog, and registrations are validated against that snapshot and
//! written back inside one transaction.

pub mod models;
pub mod schema;

use crate::catalog::{CatalogStore, CookbookEntry, registrar};
use crate::error::{Error, Result};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub use models::{find_entry, insert_entry, list_entries, load_catalog};

/// How long to wait on a database locked by another process
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create the database (and its parent directory) if needed and migrate it
pub fn init(db_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::IoError(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    info!("Initializing catalog database at {}", db_path);
    open(db_path)?;
    Ok(())
}

/// Open an existing database and bring its schema up to date
pub fn open(db_path: &str) -> Result<Connection> {
    debug!("Opening catalog database {}", db_path);
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Run `f` inside an immediate transaction, committing only on success
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}

/// Register a batch of entries, all or nothing
///
/// The catalog is loaded inside the write transaction, so the checks see
/// every entry committed by other processes.
pub fn register_entries(conn: &mut Connection, entries: Vec<CookbookEntry>) -> Result<usize> {
    transaction(conn, |tx| {
        let mut store = load_catalog(tx)?;
        let count = entries.len();
        for entry in entries {
            registrar::register(entry.clone(), &mut store)?;
            insert_entry(tx, &entry)?;
        }
        Ok(count)
    })
}

/// Load the catalog from a database path
pub fn open_catalog(db_path: &str) -> Result<CatalogStore> {
    let conn = open(db_path)?;
    load_catalog(&conn)
}
