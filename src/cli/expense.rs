//! Expense CLI commands
//!
//! Bridges the clap argument parsing with the service layer. Every command
//! prints exactly one status line (or the ledger table) on success; errors
//! propagate to the binary boundary.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_table, format_monthly_total, format_total};
use crate::error::OutlayResult;
use crate::models::ExpenseId;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense ledger subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new expense
    Add {
        /// Description of the expense
        #[arg(short, long)]
        description: String,
        /// Amount of the expense (e.g. "12.50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
    },
    /// Update an existing expense
    Update {
        /// ID of the expense to update
        #[arg(short, long)]
        id: ExpenseId,
        /// New description of the expense
        #[arg(short, long)]
        description: Option<String>,
        /// New amount of the expense
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// ID of the expense to delete
        #[arg(short, long)]
        id: ExpenseId,
    },
    /// List all expenses
    List,
    /// Get a summary of expenses
    Summary {
        /// Summary for a specific month of the current year (e.g. 8 for August)
        #[arg(short, long)]
        month: Option<u32>,
    },
}

/// Handle an expense command
pub fn handle_command(storage: &Storage, settings: &Settings, cmd: Commands) -> OutlayResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        Commands::Add {
            description,
            amount,
        } => {
            let id = service.add(&description, &amount)?;
            println!("Expense added successfully (ID: {})", id);
        }

        Commands::Update {
            id,
            description,
            amount,
        } => {
            service.update(id, description.as_deref(), amount.as_deref())?;
            println!("Expense with ID {} updated successfully.", id);
        }

        Commands::Delete { id } => {
            service.delete(id)?;
            println!("Expense deleted successfully (ID: {}).", id);
        }

        Commands::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_table(&expenses, settings));
        }

        Commands::Summary { month } => {
            let total = service.summarize(month)?;
            match month {
                Some(month) => println!("{}", format_monthly_total(total, month, settings)),
                None => println!("{}", format_total(total, settings)),
            }
        }
    }

    Ok(())
}
