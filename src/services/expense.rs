//! Expense service
//!
//! Business logic for the expense ledger: record creation with id
//! assignment, in-place edits, deletion, listing, and aggregation. Every
//! operation loads the ledger fresh from storage and, when it mutates,
//! persists the full ledger back. Failures never leave a partial write.

use chrono::{Datelike, Local};

use crate::error::{OutlayError, OutlayResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new expense and return its assigned id
    ///
    /// The id is 1 on an empty ledger, otherwise one past the highest id
    /// currently present. The date is fixed to today and never changes.
    pub fn add(&self, description: &str, amount_input: &str) -> OutlayResult<ExpenseId> {
        let description = description.trim();
        if description.is_empty() {
            return Err(OutlayError::Validation(
                "Description must not be empty".into(),
            ));
        }

        let amount = parse_positive_amount(amount_input)?;

        let mut expenses = self.storage.expenses.load()?;
        let id = next_id(&expenses);
        let expense = Expense::new(id, Local::now().date_naive(), description, amount);

        expenses.push(expense);
        self.storage.expenses.save(&expenses)?;

        Ok(id)
    }

    /// Update an existing expense's description and/or amount
    ///
    /// A new amount is parsed and validated before anything is applied, so
    /// a bad amount aborts the whole update and nothing is persisted, even
    /// when the description change alone would have been valid. A blank
    /// description is treated as "not provided". The record's date is never
    /// touched.
    pub fn update(
        &self,
        id: ExpenseId,
        new_description: Option<&str>,
        new_amount_input: Option<&str>,
    ) -> OutlayResult<Expense> {
        let new_amount = new_amount_input.map(parse_positive_amount).transpose()?;

        let mut expenses = self.storage.expenses.load()?;
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(OutlayError::NotFound { id })?;

        if let Some(description) = new_description {
            let description = description.trim();
            if !description.is_empty() {
                expense.description = description.to_string();
            }
        }

        if let Some(amount) = new_amount {
            expense.amount = amount;
        }

        let updated = expense.clone();
        self.storage.expenses.save(&expenses)?;

        Ok(updated)
    }

    /// Delete an expense, returning the removed record
    pub fn delete(&self, id: ExpenseId) -> OutlayResult<Expense> {
        let mut expenses = self.storage.expenses.load()?;

        let position = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(OutlayError::NotFound { id })?;

        let removed = expenses.remove(position);
        self.storage.expenses.save(&expenses)?;

        Ok(removed)
    }

    /// List all expenses in insertion order
    pub fn list(&self) -> OutlayResult<Vec<Expense>> {
        self.storage.expenses.load()
    }

    /// Total expenses, optionally restricted to a month of the current year
    ///
    /// A record from the same calendar month of a *different* year is
    /// excluded: `summarize(Some(8))` means "August of this year".
    pub fn summarize(&self, month: Option<u32>) -> OutlayResult<Money> {
        let expenses = self.storage.expenses.load()?;

        match month {
            None => Ok(sum_all(&expenses)),
            Some(month) => {
                if !(1..=12).contains(&month) {
                    return Err(OutlayError::Validation(format!(
                        "Month must be between 1 and 12, got {}",
                        month
                    )));
                }
                let today = Local::now().date_naive();
                Ok(sum_for_month(&expenses, today.year(), month))
            }
        }
    }
}

/// Id for the next record: 1 on an empty ledger, else max + 1
///
/// Pure max-scan over the present records, not a persisted counter: deleting
/// the highest-id record frees its id for reuse.
fn next_id(expenses: &[Expense]) -> ExpenseId {
    expenses
        .iter()
        .map(|e| e.id)
        .max()
        .map(|id| id.next())
        .unwrap_or(ExpenseId::first())
}

/// Parse an amount input, requiring a strictly positive value
fn parse_positive_amount(input: &str) -> OutlayResult<Money> {
    let amount = Money::parse(input).map_err(|_| OutlayError::InvalidAmount {
        input: input.to_string(),
    })?;

    if !amount.is_positive() {
        return Err(OutlayError::NonPositiveAmount { amount });
    }

    Ok(amount)
}

/// Sum of all amounts
fn sum_all(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of amounts for a specific month of a specific year
fn sum_for_month(expenses: &[Expense], year: i32, month: u32) -> Money {
    expenses
        .iter()
        .filter(|e| e.is_in_month(year, month))
        .map(|e| e.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::OutlayPaths;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn file_bytes(storage: &Storage) -> Vec<u8> {
        std::fs::read(storage.expenses.path()).unwrap_or_default()
    }

    fn expense(id: u64, date: (i32, u32, u32), cents: i64) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            "Lunch",
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);

        let first = service.add("Lunch", "12.50").unwrap();
        let second = service.add("Coffee", "3.00").unwrap();

        assert_eq!(first, ExpenseId::new(1));
        assert_eq!(second, ExpenseId::new(2));
        assert_eq!(service.list().unwrap().len(), 2);
    }

    #[test]
    fn test_add_sets_today_and_amount() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);

        service.add("Lunch", "12.50").unwrap();

        let expenses = service.list().unwrap();
        assert_eq!(expenses[0].description, "Lunch");
        assert_eq!(expenses[0].amount, Money::from_cents(1250));
        assert_eq!(expenses[0].date, Local::now().date_naive());
    }

    #[test]
    fn test_add_rejects_unparseable_amount() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Lunch", "12.50").unwrap();
        let before = file_bytes(&storage);

        let err = service.add("Coffee", "abc").unwrap_err();
        assert!(matches!(err, OutlayError::InvalidAmount { .. }));

        // Ledger file is byte-identical to before the call
        assert_eq!(file_bytes(&storage), before);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        let before = file_bytes(&storage);

        for input in ["-5", "0", "0.00"] {
            let err = service.add("Coffee", input).unwrap_err();
            assert!(
                matches!(err, OutlayError::NonPositiveAmount { .. }),
                "input {:?} should be rejected as non-positive",
                input
            );
        }

        assert_eq!(file_bytes(&storage), before);
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.add("   ", "5.00").unwrap_err();
        assert!(matches!(err, OutlayError::Validation(_)));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_description_only() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        let id = service.add("Lunch", "12.50").unwrap();

        let updated = service.update(id, Some("Team lunch"), None).unwrap();

        assert_eq!(updated.description, "Team lunch");
        assert_eq!(updated.amount, Money::from_cents(1250));
    }

    #[test]
    fn test_update_amount_keeps_description_and_date() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        let id = service.add("Lunch", "12.50").unwrap();
        let created = service.list().unwrap()[0].clone();

        let updated = service.update(id, None, Some("15.00")).unwrap();

        assert_eq!(updated.amount, Money::from_cents(1500));
        assert_eq!(updated.description, "Lunch");
        assert_eq!(updated.date, created.date);
    }

    #[test]
    fn test_update_nonexistent_id_is_not_found() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Lunch", "12.50").unwrap();
        let before = file_bytes(&storage);

        let err = service
            .update(ExpenseId::new(99), Some("Dinner"), None)
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(file_bytes(&storage), before);
    }

    #[test]
    fn test_update_bad_amount_aborts_description_change() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        let id = service.add("Lunch", "12.50").unwrap();
        let before = file_bytes(&storage);

        let err = service.update(id, Some("Dinner"), Some("0")).unwrap_err();
        assert!(matches!(err, OutlayError::NonPositiveAmount { .. }));

        // Neither field was persisted
        assert_eq!(file_bytes(&storage), before);
        assert_eq!(service.list().unwrap()[0].description, "Lunch");
    }

    #[test]
    fn test_update_blank_description_is_ignored() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        let id = service.add("Lunch", "12.50").unwrap();

        let updated = service.update(id, Some("  "), Some("15.00")).unwrap();

        assert_eq!(updated.description, "Lunch");
        assert_eq!(updated.amount, Money::from_cents(1500));
    }

    #[test]
    fn test_delete_removes_record() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        let first = service.add("Lunch", "12.50").unwrap();
        let second = service.add("Coffee", "3.00").unwrap();

        let removed = service.delete(first).unwrap();

        assert_eq!(removed.id, first);
        let remaining = service.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
    }

    #[test]
    fn test_delete_nonexistent_id_is_not_found() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Lunch", "12.50").unwrap();
        let before = file_bytes(&storage);

        let err = service.delete(ExpenseId::new(99)).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(file_bytes(&storage), before);
    }

    #[test]
    fn test_reuses_id_after_deleting_max() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Lunch", "12.50").unwrap();
        let second = service.add("Coffee", "3.00").unwrap();

        service.delete(second).unwrap();
        let reassigned = service.add("Tea", "2.00").unwrap();

        // Max-scan id assignment hands the freed id out again
        assert_eq!(reassigned, second);
    }

    #[test]
    fn test_summarize_all() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Lunch", "12.50").unwrap();
        service.add("Coffee", "3.00").unwrap();

        let total = service.summarize(None).unwrap();
        assert_eq!(total, Money::from_cents(1550));
    }

    #[test]
    fn test_summarize_current_month_includes_todays_records() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Lunch", "12.50").unwrap();

        let today = Local::now().date_naive();
        let total = service.summarize(Some(today.month())).unwrap();
        assert_eq!(total, Money::from_cents(1250));
    }

    #[test]
    fn test_summarize_rejects_month_out_of_range() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);

        for month in [0, 13] {
            let err = service.summarize(Some(month)).unwrap_err();
            assert!(matches!(err, OutlayError::Validation(_)));
        }
    }

    #[test]
    fn test_sum_for_month_excludes_other_years() {
        let expenses = vec![
            expense(1, (2025, 8, 3), 1000),
            expense(2, (2025, 8, 20), 500),
            expense(3, (2024, 8, 10), 9999),
            expense(4, (2025, 7, 31), 700),
        ];

        let total = sum_for_month(&expenses, 2025, 8);
        assert_eq!(total, Money::from_cents(1500));
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        assert_eq!(next_id(&[]), ExpenseId::new(1));

        let expenses = vec![
            expense(5, (2025, 8, 1), 100),
            expense(2, (2025, 8, 2), 100),
        ];
        assert_eq!(next_id(&expenses), ExpenseId::new(6));
    }

    #[test]
    fn test_full_scenario() {
        let (_temp_dir, storage) = test_storage();
        let service = ExpenseService::new(&storage);

        let lunch = service.add("Lunch", "12.50").unwrap();
        assert_eq!(lunch, ExpenseId::new(1));
        assert_eq!(service.list().unwrap().len(), 1);

        let coffee = service.add("Coffee", "3.00").unwrap();
        assert_eq!(coffee, ExpenseId::new(2));

        let updated = service.update(lunch, None, Some("15.00")).unwrap();
        assert_eq!(updated.amount, Money::from_cents(1500));
        assert_eq!(updated.description, "Lunch");

        service.delete(coffee).unwrap();
        let remaining = service.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, lunch);

        assert_eq!(service.summarize(None).unwrap(), Money::from_cents(1500));
    }
}
