//! Core data models for outlay-cli
//!
//! This module contains the data structures that represent the expense
//! ledger: the expense record itself, its id, and the money type.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
