//! Terminal display formatting for outlay-cli

pub mod expense;

pub use expense::{format_expense_table, format_monthly_total, format_total};
