//! Display formatting for spendlog
//!
//! Formatting functions build strings; the session controller decides
//! where they are written.

pub mod expense;

pub use expense::format_expense_table;
