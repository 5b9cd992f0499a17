//! Expense table formatting
//!
//! Renders the store as a fixed-width table: Date 12, Amount 10,
//! Category 15, Description 15, all left-aligned. Values longer than
//! their column are not truncated; the row simply misaligns.

use crate::models::{ExpenseStore, DATE_FORMAT};

const SEPARATOR_WIDTH: usize = 55;

/// Format the whole store as a table, or a notice if it is empty
pub fn format_expense_table(store: &ExpenseStore) -> String {
    if store.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Expenses:\n");
    output.push_str(&"-".repeat(SEPARATOR_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<12} {:<10} {:<15} {:<15}\n",
        "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(SEPARATOR_WIDTH));
    output.push('\n');

    for expense in store {
        output.push_str(&format!(
            "{:<12} {:<10.2} {:<15} {:<15}\n",
            expense.date.format(DATE_FORMAT).to_string(),
            expense.amount,
            expense.category,
            expense.description
        ));
    }

    output.push_str(&"-".repeat(SEPARATOR_WIDTH));
    output.push('\n');

    output
}
