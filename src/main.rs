use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use expense_tracker::cli::expense::{ExpenseInput, parse_amount};
use expense_tracker::core::ExpensePatch;
use expense_tracker::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct AddArgs {
    /// What the money was spent on
    #[arg(short, long)]
    name: String,

    /// Amount in dollars, e.g. 15.99
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_amount)]
    amount: f64,

    /// Category identifier, e.g. food or transport
    #[arg(short = 'C', long)]
    category: String,

    /// Date as YYYY-MM-DD, defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Free text notes
    #[arg(long)]
    notes: Option<String>,

    /// Explicit id, defaults to the current timestamp in milliseconds
    #[arg(long)]
    id: Option<String>,
}

#[derive(Args)]
struct UpdateArgs {
    /// Id of the expense to change
    id: String,

    #[arg(short, long)]
    name: Option<String>,

    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_amount)]
    amount: Option<f64>,

    #[arg(short = 'C', long)]
    category: Option<String>,

    /// Date as YYYY-MM-DD
    #[arg(short, long)]
    date: Option<NaiveDate>,

    #[arg(long)]
    notes: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List all expenses
    List {
        /// Show compact amounts such as 1.5K
        #[arg(short, long)]
        abbreviate: bool,
    },
    /// Record a new expense
    Add(AddArgs),
    /// Change fields of an existing expense
    Update(UpdateArgs),
    /// Remove an expense
    Delete {
        /// Id of the expense to remove
        id: String,
    },
}

impl From<Commands> for expense_tracker::AppCommand {
    fn from(cmd: Commands) -> expense_tracker::AppCommand {
        match cmd {
            Commands::List { abbreviate } => expense_tracker::AppCommand::List { abbreviate },
            Commands::Add(args) => expense_tracker::AppCommand::Add(ExpenseInput {
                id: args.id,
                name: args.name,
                amount: args.amount,
                date: args.date,
                category: args.category,
                notes: args.notes,
            }),
            Commands::Update(args) => expense_tracker::AppCommand::Update {
                id: args.id,
                patch: ExpensePatch {
                    id: None,
                    name: args.name,
                    amount: args.amount,
                    date: args.date.map(|d| d.format("%Y-%m-%d").to_string()),
                    category: args.category,
                    notes: args.notes,
                },
            },
            Commands::Delete { id } => expense_tracker::AppCommand::Delete { id },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let result = match cli.command {
        Some(Commands::Setup) => expense_tracker::cli::setup::setup(cli.config_path.as_deref()),
        Some(cmd) => expense_tracker::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
