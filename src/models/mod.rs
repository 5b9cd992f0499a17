//! Core data models for spendlog
//!
//! The expense record and the in-memory store the session works on.

pub mod expense;
pub mod store;

pub use expense::{parse_amount, parse_date, Expense, DATE_FORMAT};
pub use store::ExpenseStore;
