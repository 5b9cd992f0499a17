//! Current-date capability
//!
//! The add-entry flow substitutes "today" for a blank date. Taking the
//! date from a trait keeps that rule testable without the wall clock.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date
pub trait Clock {
    /// Today's date, local time, date-only precision
    fn today(&self) -> NaiveDate;
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
