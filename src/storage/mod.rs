//! Storage layer for spendlog
//!
//! Converts between the in-memory expense store and the on-disk CSV file.
//! Stateless: each save or load is a single self-contained operation.

pub mod expenses;

pub use expenses::{load_expenses, save_expenses, LoadOutcome, LoadStatus};
