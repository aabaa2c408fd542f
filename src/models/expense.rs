//! Expense record model
//!
//! A single entry in the ledger: an id assigned by the service, the date the
//! expense was recorded, a free-form description, and a positive amount.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
///
/// The `date` is fixed at creation time and never modified afterwards;
/// `description` and `amount` may be edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier among currently-present records
    pub id: ExpenseId,

    /// Date the expense was recorded (serialized as YYYY-MM-DD)
    pub date: NaiveDate,

    /// What the money was spent on
    pub description: String,

    /// Amount spent, always strictly positive
    pub amount: Money,
}

impl Expense {
    /// Create a new expense record
    pub fn new(id: ExpenseId, date: NaiveDate, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
        }
    }

    /// Check whether this expense falls in the given month of the given year
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}
