// src/config.rs
//! Configuration file parsing for the cookbook CLI
//!
//! Supports an optional TOML file with the following sections:
//! - [catalog] - Database location
//! - [logging] - Default tracing filter (overridden by `RUST_LOG`)
//! - [output] - Output format for summaries and listings
//!
//! ```toml
//! [catalog]
//! db_path = "/srv/kitchen/cookbook.db"
//!
//! [logging]
//! filter = "cookbook=debug"
//!
//! [output]
//! json = true
//! ```
//!
//! Every section and field is optional. Command-line flags take precedence.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Default database location
pub const DEFAULT_DB_PATH: &str = "/var/lib/cookbook/cookbook.db";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct CookbookConfig {
    #[serde(default)]
    pub catalog: CatalogSection,

    #[serde(default)]
    pub logging: LoggingSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Catalog storage section
#[derive(Debug, Deserialize)]
pub struct CatalogSection {
    /// Path to the SQLite catalog database
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

/// Logging section
#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

/// Output section
#[derive(Debug, Default, Deserialize)]
pub struct OutputSection {
    /// Print summaries and listings as JSON
    #[serde(default)]
    pub json: bool,
}

impl CookbookConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CookbookConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.db_path.trim().is_empty() {
            anyhow::bail!("catalog.db_path cannot be empty");
        }

        tracing_subscriber::EnvFilter::try_new(&self.logging.filter)
            .with_context(|| format!("Invalid logging.filter: {}", self.logging.filter))?;

        Ok(())
    }
}
