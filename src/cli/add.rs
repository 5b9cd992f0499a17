//! Interactive entry collection
//!
//! Prompts for the fields of a new expense and validates them. Either a
//! fully valid record comes back or nothing does; a failed field stops
//! the flow before the remaining prompts.

use std::io::{BufRead, Write};

use crate::clock::Clock;
use crate::error::SpendlogResult;
use crate::models::{parse_amount, parse_date, Expense};

/// Prompt for and validate a new expense
///
/// The outer `Result` is the console channel itself failing; the inner one
/// is validation. A blank date means today, taken from the clock.
pub fn collect_new_entry<R, W, C>(
    input: &mut R,
    output: &mut W,
    clock: &C,
) -> std::io::Result<SpendlogResult<Expense>>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    let amount_str = prompt(input, output, "Enter expense amount: ")?;
    let amount = match parse_amount(&amount_str) {
        Ok(amount) => amount,
        Err(err) => return Ok(Err(err)),
    };

    let category = prompt(input, output, "Enter expense category: ")?;
    let description = prompt(input, output, "Enter expense description: ")?;

    let date_str = prompt(input, output, "Enter date (YYYY-MM-DD, or leave blank for today): ")?;
    let date = if date_str.trim().is_empty() {
        clock.today()
    } else {
        match parse_date(&date_str) {
            Ok(date) => date,
            Err(err) => return Ok(Err(err)),
        }
    };

    Ok(Ok(Expense::new(date, amount, category, description)))
}

/// Write a prompt and read one line, without its trailing newline
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> std::io::Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::fixed::FixedClock;
    use crate::error::SpendlogError;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn fixed_clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn collect(input: &str) -> SpendlogResult<Expense> {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        collect_new_entry(&mut input, &mut output, &fixed_clock()).unwrap()
    }

    #[test]
    fn test_valid_entry() {
        let expense = collect("42.50\nGroceries\nWeekly shopping\n2024-01-15\n").unwrap();
        assert_eq!(expense.amount, 42.5);
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.description, "Weekly shopping");
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_blank_date_defaults_to_today() {
        let expense = collect("10\nFood\nLunch\n\n").unwrap();
        assert_eq!(expense.date, fixed_clock().0);
    }

    #[test]
    fn test_invalid_amount_stops_the_flow() {
        let err = collect("twelve\n").unwrap_err();
        assert!(matches!(err, SpendlogError::InvalidAmount(_)));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let err = collect("12\nFood\nLunch\n15/01/2024\n").unwrap_err();
        assert!(matches!(err, SpendlogError::InvalidDate(_)));
    }

    #[test]
    fn test_negative_amount_accepted() {
        let expense = collect("-5.25\nRefunds\nReturned kettle\n2024-01-15\n").unwrap();
        assert_eq!(expense.amount, -5.25);
    }

    #[test]
    fn test_prompts_in_order() {
        let mut input = Cursor::new(b"1\nA\nB\n\n".to_vec());
        let mut output = Vec::new();
        collect_new_entry(&mut input, &mut output, &fixed_clock())
            .unwrap()
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        let amount = text.find("amount").unwrap();
        let category = text.find("category").unwrap();
        let description = text.find("description").unwrap();
        let date = text.find("date").unwrap();
        assert!(amount < category && category < description && description < date);
    }
}
