//! In-memory expense store
//!
//! Holds all records for the session in insertion order. The session
//! controller owns one instance for the process lifetime; everything else
//! borrows it for a single operation.

use super::expense::Expense;

/// The ordered collection of expense records for the current session
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    entries: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Records are never mutated or removed afterwards.
    pub fn append(&mut self, expense: Expense) {
        self.entries.push(expense);
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.entries.iter()
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExpenseStore {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(day: u32, amount: f64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            amount,
            "Groceries",
            "test",
        )
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ExpenseStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_append_preserves_order_and_prior_records() {
        let mut store = ExpenseStore::new();
        store.append(expense(1, 10.0));
        store.append(expense(2, 20.0));

        let before: Vec<Expense> = store.iter().cloned().collect();
        store.append(expense(3, 30.0));

        assert_eq!(store.len(), 3);
        let after: Vec<&Expense> = store.iter().collect();
        assert_eq!(after[0], &before[0]);
        assert_eq!(after[1], &before[1]);
        assert_eq!(after[2].amount, 30.0);
    }

    #[test]
    fn test_duplicates_permitted() {
        let mut store = ExpenseStore::new();
        store.append(expense(1, 10.0));
        store.append(expense(1, 10.0));
        assert_eq!(store.len(), 2);
    }
}
