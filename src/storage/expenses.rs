//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense ledger to expenses.json. The file
//! holds a bare JSON array of records, and every save fully overwrites it.

use std::path::PathBuf;

use tracing::warn;

use crate::error::OutlayError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
///
/// Stateless: callers load the full ledger, mutate it in memory, and save it
/// back. There is no cache, matching the one-operation-per-process model.
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the full ledger from disk
    ///
    /// A missing file yields an empty ledger. A file that exists but fails
    /// to parse also yields an empty ledger: the unreadable content is
    /// discarded on the next save, so the situation is logged rather than
    /// surfaced as an error. Open failures other than absence still
    /// propagate.
    pub fn load(&self) -> Result<Vec<Expense>, OutlayError> {
        match read_json(&self.path) {
            Ok(expenses) => Ok(expenses),
            Err(OutlayError::Json(err)) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "expense file is not valid JSON; starting from an empty ledger"
                );
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Save the full ledger to disk, overwriting prior content
    pub fn save(&self, expenses: &[Expense]) -> Result<(), OutlayError> {
        write_json_atomic(&self.path, &expenses)
    }
}
