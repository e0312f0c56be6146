// src/commands/mod.rs
//! Command handlers for the cookbook CLI

mod catalog;
mod query;

pub use catalog::{cmd_import, cmd_ingredient, cmd_init, cmd_recipe};
pub use query::{cmd_list, cmd_show, cmd_summarize};
