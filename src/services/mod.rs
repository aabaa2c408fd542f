//! Business logic layer for outlay-cli

pub mod expense;

pub use expense::ExpenseService;
