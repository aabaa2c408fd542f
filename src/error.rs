//! Custom error types for outlay-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{ExpenseId, Money};

/// The main error type for outlay-cli operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Amount input that does not parse as a decimal number
    #[error("Invalid amount: '{input}'. Please provide a number.")]
    InvalidAmount { input: String },

    /// Amount that parsed but is zero or negative
    #[error("Amount must be a positive number, got {amount}")]
    NonPositiveAmount { amount: Money },

    /// No expense with the given id
    #[error("Expense with ID {id} not found")]
    NotFound { id: ExpenseId },

    /// Other validation errors (blank description, month out of range)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl OutlayError {
    /// Create a "not found" error for an expense id
    pub fn expense_not_found(id: ExpenseId) -> Self {
        Self::NotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is one of the amount/description validation errors
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. } | Self::NonPositiveAmount { .. } | Self::Validation(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for OutlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OutlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for outlay-cli operations
pub type OutlayResult<T> = Result<T, OutlayError>;
