pub mod cli;
pub mod core;
pub mod store;

use crate::cli::expense::ExpenseInput;
use crate::core::config::AppConfig;
use crate::core::{ExpensePatch, ExpenseStore};
use anyhow::Result;
use tracing::{debug, info};

/// Commands that operate on the expense store.
#[derive(Debug, Clone)]
pub enum AppCommand {
    List { abbreviate: bool },
    Add(ExpenseInput),
    Update { id: String, patch: ExpensePatch },
    Delete { id: String },
}

/// Runs `command` and returns the text to show the user.
pub fn execute(command: AppCommand, config_path: Option<&str>) -> Result<String> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = ExpenseStore::new(store::open_storage(&config)?);

    match command {
        AppCommand::List { abbreviate } => cli::list::run(&store, abbreviate || config.abbreviate),
        AppCommand::Add(input) => cli::expense::add(&store, input),
        AppCommand::Update { id, patch } => cli::expense::update(&store, &id, patch),
        AppCommand::Delete { id } => cli::expense::delete(&store, &id),
    }
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Expense tracker starting...");
    let output = execute(command, config_path)?;
    println!("{output}");
    Ok(())
}
