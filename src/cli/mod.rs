//! Interactive console surface for spendlog
//!
//! The menu session owns the store for the process lifetime; the add flow
//! collects and validates one new entry at a time.

pub mod add;
pub mod menu;

pub use add::collect_new_entry;
pub use menu::{describe_load, Session};
