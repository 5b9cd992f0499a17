//! CSV persistence for expense records
//!
//! The file format is a plain delimited text file, UTF-8, with a fixed
//! header line:
//!
//! ```text
//! Date,Amount,Category,Description
//! 2024-01-15,42.50,Groceries,Weekly shopping
//! ```
//!
//! The header is mandatory on write and skipped (not validated) on read.
//! Dates are strict `YYYY-MM-DD`; amounts are written with no fixed
//! precision and read as arbitrary numeric strings.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{parse_amount, parse_date, Expense, ExpenseStore};

/// The fixed CSV header row
const HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// What a `load_expenses` call produced
#[derive(Debug)]
pub struct LoadOutcome {
    /// The records that were loaded (possibly partial, possibly empty)
    pub store: ExpenseStore,
    /// How the load went
    pub status: LoadStatus,
}

/// Status of a completed load
#[derive(Debug)]
pub enum LoadStatus {
    /// The file existed and every line parsed
    Loaded,
    /// No file at the given path; starting with an empty store
    StartedFresh,
    /// A line failed to parse; the store holds the records before it
    Corrupt(SpendlogError),
    /// The file could not be read at all; the store is empty
    Unreadable(SpendlogError),
}

impl LoadOutcome {
    fn fresh() -> Self {
        Self {
            store: ExpenseStore::new(),
            status: LoadStatus::StartedFresh,
        }
    }

    fn unreadable(err: SpendlogError) -> Self {
        Self {
            store: ExpenseStore::new(),
            status: LoadStatus::Unreadable(err),
        }
    }

    /// The error carried by a corrupt or unreadable load, if any
    pub fn error(&self) -> Option<&SpendlogError> {
        match &self.status {
            LoadStatus::Corrupt(err) | LoadStatus::Unreadable(err) => Some(err),
            _ => None,
        }
    }
}

/// Save the store to `path`, overwriting unconditionally
///
/// On failure the file may be partially written, but the in-memory store
/// is untouched and the session continues.
pub fn save_expenses(store: &ExpenseStore, path: &Path) -> SpendlogResult<()> {
    let file = File::create(path).map_err(SpendlogError::Write)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(HEADER).map_err(write_error)?;
    for expense in store {
        writer.serialize(expense).map_err(write_error)?;
    }
    writer.flush().map_err(SpendlogError::Write)?;

    Ok(())
}

/// Load a store from `path`
///
/// A missing file is not an error: the outcome is an empty store with a
/// `StartedFresh` status. A line that fails to parse stops the load and
/// returns the records parsed before it alongside a `CorruptFile` error.
/// Any other I/O fault returns an empty store and a `ReadError`.
pub fn load_expenses(path: &Path) -> LoadOutcome {
    if !path.exists() {
        return LoadOutcome::fresh();
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => return LoadOutcome::unreadable(SpendlogError::Read(err)),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut store = ExpenseStore::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                // An underlying I/O fault empties the store; anything else
                // is a malformed file and keeps what parsed so far.
                let line = err.position().map(|p| p.line()).unwrap_or(0);
                return match err.into_kind() {
                    csv::ErrorKind::Io(io_err) => {
                        LoadOutcome::unreadable(SpendlogError::Read(io_err))
                    }
                    other => LoadOutcome {
                        store,
                        status: LoadStatus::Corrupt(SpendlogError::corrupt_line(
                            line,
                            format!("{:?}", other),
                        )),
                    },
                };
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        match parse_record(&record, line) {
            Ok(expense) => store.append(expense),
            Err(err) => {
                return LoadOutcome {
                    store,
                    status: LoadStatus::Corrupt(err),
                }
            }
        }
    }

    LoadOutcome {
        store,
        status: LoadStatus::Loaded,
    }
}

/// Parse one CSV record into an expense
///
/// Fields beyond the fourth are ignored; fewer than four is corrupt.
fn parse_record(record: &csv::StringRecord, line: u64) -> SpendlogResult<Expense> {
    if record.len() < 4 {
        return Err(SpendlogError::corrupt_line(
            line,
            format!("expected 4 fields, found {}", record.len()),
        ));
    }

    let date =
        parse_date(&record[0]).map_err(|err| SpendlogError::corrupt_line(line, err.to_string()))?;
    let amount =
        parse_amount(&record[1]).map_err(|err| SpendlogError::corrupt_line(line, err.to_string()))?;

    Ok(Expense::new(date, amount, &record[2], &record[3]))
}

fn write_error(err: csv::Error) -> SpendlogError {
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => SpendlogError::Write(io_err),
        other => SpendlogError::Write(io::Error::new(
            io::ErrorKind::Other,
            format!("{:?}", other),
        )),
    }
}
