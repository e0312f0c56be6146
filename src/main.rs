// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use cookbook::CookbookConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CookbookConfig::load_or_default(cli.config.as_deref().map(Path::new))?;

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let db_path = |flag: Option<String>| flag.unwrap_or_else(|| config.catalog.db_path.clone());
    let json = |flag: bool| flag || config.output.json;

    match cli.command {
        Some(Commands::Init { db_path: path }) => commands::cmd_init(&db_path(path)),
        Some(Commands::Ingredient {
            name,
            cook_time,
            db_path: path,
        }) => commands::cmd_ingredient(&db_path(path), &name, cook_time),
        Some(Commands::Recipe {
            name,
            items,
            db_path: path,
        }) => commands::cmd_recipe(&db_path(path), &name, items),
        Some(Commands::Import {
            path: file,
            db_path: path,
            dry_run,
        }) => commands::cmd_import(&db_path(path), &file, dry_run),
        Some(Commands::Summarize {
            name,
            db_path: path,
            json: as_json,
        }) => commands::cmd_summarize(&db_path(path), &name, json(as_json)),
        Some(Commands::List {
            kind,
            db_path: path,
            json: as_json,
        }) => commands::cmd_list(&db_path(path), kind.map(Into::into), json(as_json)),
        Some(Commands::Show {
            name,
            db_path: path,
            json: as_json,
        }) => commands::cmd_show(&db_path(path), &name, json(as_json)),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "cookbook", &mut std::io::stdout());
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
