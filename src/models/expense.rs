//! Expense model
//!
//! A single tracked transaction: date, amount, category, and a free-text
//! description. Records are immutable once created; corrections happen by
//! editing the expense file outside the program.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SpendlogError, SpendlogResult};

/// The one date format accepted on input and used in the expense file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense record
///
/// Field names are renamed to PascalCase so the CSV header reads
/// `Date,Amount,Category,Description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expense {
    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// Monetary amount. Negative values are accepted; only parseability
    /// is validated.
    pub amount: f64,

    /// Free-text category label
    pub category: String,

    /// Free-text note
    pub description: String,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.2} {}",
            self.date.format(DATE_FORMAT),
            self.amount,
            self.category
        )
    }
}

/// Parse an amount string into a numeric value
///
/// Any string `f64` accepts is valid, including negative amounts.
pub fn parse_amount(s: &str) -> SpendlogResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| SpendlogError::InvalidAmount(s.trim().to_string()))
}

/// Parse a date string in strict `YYYY-MM-DD` form
pub fn parse_date(s: &str) -> SpendlogResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| SpendlogError::InvalidDate(s.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let expense = Expense::new(date, 42.5, "Groceries", "Weekly shopping");

        assert_eq!(expense.date, date);
        assert_eq!(expense.amount, 42.5);
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.description, "Weekly shopping");
    }

    #[test]
    fn test_display() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let expense = Expense::new(date, 42.5, "Groceries", "Weekly shopping");
        assert_eq!(format!("{}", expense), "2024-01-15 42.50 Groceries");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("42.50").unwrap(), 42.5);
        assert_eq!(parse_amount("15").unwrap(), 15.0);
        assert_eq!(parse_amount(" 7.25 ").unwrap(), 7.25);
    }

    #[test]
    fn test_parse_amount_negative_accepted() {
        // Refunds show up as negative amounts; there is no range check.
        assert_eq!(parse_amount("-12.00").unwrap(), -12.0);
    }

    #[test]
    fn test_parse_amount_invalid() {
        let err = parse_amount("12,50").unwrap_err();
        assert!(matches!(err, SpendlogError::InvalidAmount(_)));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("twelve").is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(matches!(
            parse_date("15/01/2024").unwrap_err(),
            SpendlogError::InvalidDate(_)
        ));
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("not a date").is_err());
    }

    #[test]
    fn test_serialization_field_names() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let expense = Expense::new(date, 42.5, "Groceries", "Weekly shopping");

        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"Date\":\"2024-01-15\""));
        assert!(json.contains("\"Amount\":42.5"));
        assert!(json.contains("\"Category\":\"Groceries\""));
        assert!(json.contains("\"Description\":\"Weekly shopping\""));
    }
}
