// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: database path
fn db_path_arg() -> Arg {
    Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .help("Database path (default: /var/lib/cookbook/cookbook.db)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(clap::ArgAction::SetTrue)
        .help("Print as JSON")
}

fn build_cli() -> Command {
    Command::new("cookbook")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Cookbook Contributors")
        .about("Recipe and ingredient catalog with ingredient resolution")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Path to a TOML configuration file"),
        )
        .subcommand(
            Command::new("init")
                .about("Initialize a new catalog database")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("ingredient")
                .about("Register an ingredient")
                .arg(Arg::new("name").required(true).help("Ingredient name"))
                .arg(
                    Arg::new("cook_time")
                        .short('t')
                        .long("cook-time")
                        .required(true)
                        .help("Preparation time of one unit"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("recipe")
                .about("Register a recipe")
                .arg(Arg::new("name").required(true).help("Recipe name"))
                .arg(
                    Arg::new("items")
                        .short('i')
                        .long("item")
                        .value_name("NAME=QUANTITY")
                        .action(clap::ArgAction::Append)
                        .help("Required item (repeatable, order is kept)"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("import")
                .about("Register every entry of a JSON or TOML cookbook file")
                .arg(Arg::new("path").required(true).help("Path to the cookbook file"))
                .arg(db_path_arg())
                .arg(
                    Arg::new("dry_run")
                        .long("dry-run")
                        .action(clap::ArgAction::SetTrue)
                        .help("Validate without writing anything"),
                ),
        )
        .subcommand(
            Command::new("summarize")
                .about("Show the total cook time and base ingredients of a recipe")
                .arg(Arg::new("name").required(true).help("Recipe name"))
                .arg(db_path_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List catalog entries")
                .arg(
                    Arg::new("kind")
                        .short('k')
                        .long("kind")
                        .value_parser(["ingredient", "recipe"])
                        .help("Only list entries of this kind"),
                )
                .arg(db_path_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show a single catalog entry")
                .arg(Arg::new("name").required(true).help("Entry name"))
                .arg(db_path_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(Arg::new("shell").required(true).help("Shell to generate completions for")),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("cookbook.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
