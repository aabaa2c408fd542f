//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display: the
//! ledger table and the summary status lines. The core operations return
//! structured values; everything console-facing lives here.

use chrono::Month;

use crate::config::Settings;
use crate::models::{Expense, Money};

/// Format a single expense for display (table row)
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    // Width specifiers only pad `str`-like arguments, so the id and date go
    // through strings first.
    format!(
        "{:<3} {:<10} {:<15} {}",
        expense.id.to_string(),
        expense.date.format(&settings.date_format).to_string(),
        expense.description,
        expense.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format the full ledger as a table
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<3} {:<10} {:<15} {}\n",
        "ID", "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(38));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}

/// Format the all-time total line
pub fn format_total(total: Money, settings: &Settings) -> String {
    format!(
        "Total expenses: {}",
        total.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format the monthly total line, naming the month
pub fn format_monthly_total(total: Money, month: u32, settings: &Settings) -> String {
    format!(
        "Total expenses for {}: {}",
        month_name(month),
        total.format_with_symbol(&settings.currency_symbol)
    )
}

/// English name for a 1-based month number
fn month_name(month: u32) -> &'static str {
    match Month::try_from(month as u8) {
        Ok(m) => m.name(),
        Err(_) => "Unknown",
    }
}
