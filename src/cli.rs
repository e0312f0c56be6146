// src/cli.rs
//! CLI definitions for the cookbook catalog
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use cookbook::{EntryKind, RequiredItem};

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author = "Cookbook Contributors")]
#[command(version)]
#[command(about = "Recipe and ingredient catalog with ingredient resolution", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new catalog database
    Init {
        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Register an ingredient
    Ingredient {
        /// Ingredient name
        name: String,

        /// Preparation time of one unit
        #[arg(short = 't', long)]
        cook_time: f64,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Register a recipe
    Recipe {
        /// Recipe name
        name: String,

        /// Required item as NAME=QUANTITY (repeatable, order is kept)
        #[arg(short, long = "item", value_name = "NAME=QUANTITY", value_parser = parse_required_item)]
        items: Vec<RequiredItem>,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Register every entry of a JSON or TOML cookbook file (all or nothing)
    Import {
        /// Path to the cookbook file
        path: String,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<String>,

        /// Validate the file against the catalog without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the total cook time and base ingredients of a recipe
    Summarize {
        /// Recipe name
        name: String,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog entries
    List {
        /// Only list entries of this kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single catalog entry
    Show {
        /// Entry name
        name: String,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Entry kind filter for `list`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Ingredient,
    Recipe,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Ingredient => EntryKind::Ingredient,
            KindArg::Recipe => EntryKind::Recipe,
        }
    }
}

/// Parse `NAME=QUANTITY`
fn parse_required_item(arg: &str) -> Result<RequiredItem, String> {
    let (name, quantity) = arg
        .rsplit_once('=')
        .ok_or_else(|| format!("Expected NAME=QUANTITY, got '{}'", arg))?;

    let quantity: f64 = quantity
        .trim()
        .parse()
        .map_err(|e| format!("Invalid quantity in '{}': {}", arg, e))?;

    Ok(RequiredItem::new(name.trim(), quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_required_item() {
        let item = parse_required_item("egg=2").unwrap();
        assert_eq!(item, RequiredItem::new("egg", 2.0));

        let item = parse_required_item("brown sugar = 0.5").unwrap();
        assert_eq!(item, RequiredItem::new("brown sugar", 0.5));

        assert!(parse_required_item("egg").is_err());
        assert_eq!(parse_required_item("=2").unwrap(), RequiredItem::new("", 2.0));
        assert!(parse_required_item("egg=lots").is_err());
    }

    #[test]
    fn test_recipe_items_keep_order() {
        let cli = Cli::try_parse_from([
            "cookbook", "recipe", "cake", "--item", "batter=3", "-i", "egg=1",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Recipe { name, items, .. }) => {
                assert_eq!(name, "cake");
                assert_eq!(
                    items,
                    vec![RequiredItem::new("batter", 3.0), RequiredItem::new("egg", 1.0)]
                );
            }
            _ => panic!("expected recipe command"),
        }
    }
}
