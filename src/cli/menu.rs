//! The interactive menu session
//!
//! Owns the expense store for the process lifetime and loops over the four
//! menu operations. No operation is fatal: every failure becomes a message
//! and the menu comes back.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

use crate::clock::Clock;
use crate::display::format_expense_table;
use crate::models::ExpenseStore;
use crate::storage::{load_expenses, save_expenses, LoadOutcome, LoadStatus};

use super::add::collect_new_entry;

/// One of the four menu operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Save,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection; anything unrecognized is `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Save),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive session: the store, where it persists, and how to draw
pub struct Session {
    store: ExpenseStore,
    data_file: PathBuf,
    clear_screen: bool,
}

impl Session {
    /// Create a session over an already-loaded store
    pub fn new(store: ExpenseStore, data_file: PathBuf, clear_screen: bool) -> Self {
        Self {
            store,
            data_file,
            clear_screen,
        }
    }

    /// Load the expense file and report how it went
    pub fn load(data_file: PathBuf, clear_screen: bool) -> (Self, Option<String>) {
        let outcome = load_expenses(&data_file);
        let notice = describe_load(&outcome);
        (Self::new(outcome.store, data_file, clear_screen), notice)
    }

    /// The records currently in the session
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Exiting does not save; unsaved entries are discarded. The user must
    /// choose Save explicitly beforehand.
    pub fn run<R, W, C>(&mut self, input: &mut R, output: &mut W, clock: &C) -> std::io::Result<()>
    where
        R: BufRead,
        W: Write,
        C: Clock,
    {
        loop {
            self.clear(output)?;
            writeln!(output)?;
            writeln!(output, "Expense Tracker")?;
            writeln!(output, "1. Add Expense")?;
            writeln!(output, "2. View Expenses")?;
            writeln!(output, "3. Save Expenses")?;
            writeln!(output, "4. Exit")?;
            write!(output, "Enter your choice: ")?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                // End of input: leave the loop as if the user chose Exit.
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.handle_add(input, output, clock)?,
                Some(MenuChoice::View) => self.handle_view(input, output)?,
                Some(MenuChoice::Save) => self.handle_save(output)?,
                Some(MenuChoice::Exit) => break,
                None => {
                    writeln!(output, "Invalid choice. Please try again.")?;
                    pause(input, output)?;
                }
            }
        }

        Ok(())
    }

    fn handle_add<R, W, C>(&mut self, input: &mut R, output: &mut W, clock: &C) -> std::io::Result<()>
    where
        R: BufRead,
        W: Write,
        C: Clock,
    {
        self.clear(output)?;
        match collect_new_entry(input, output, clock)? {
            Ok(expense) => {
                self.store.append(expense);
                writeln!(output, "Expense added successfully!")?;
            }
            Err(err) => {
                writeln!(output, "{}", err)?;
            }
        }
        pause(input, output)
    }

    fn handle_view<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> std::io::Result<()> {
        self.clear(output)?;
        write!(output, "{}", format_expense_table(&self.store))?;
        pause(input, output)
    }

    fn handle_save<W: Write>(&mut self, output: &mut W) -> std::io::Result<()> {
        match save_expenses(&self.store, &self.data_file) {
            Ok(()) => writeln!(output, "Expenses saved to {}", self.data_file.display()),
            Err(err) => writeln!(output, "{}", err),
        }
    }

    fn clear<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        if self.clear_screen {
            crossterm::execute!(output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Describe a load outcome for the user, if there is anything to say
pub fn describe_load(outcome: &LoadOutcome) -> Option<String> {
    match &outcome.status {
        LoadStatus::Loaded => None,
        LoadStatus::StartedFresh => {
            Some("No existing expense file found. Starting fresh.".to_string())
        }
        LoadStatus::Corrupt(err) => Some(format!(
            "{}\nKeeping the {} expenses read before the error.",
            err,
            outcome.store.len()
        )),
        LoadStatus::Unreadable(err) => {
            Some(format!("{}\nStarting with an empty expense list.", err))
        }
    }
}

/// Read one line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn pause<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<()> {
    write!(output, "Press Enter to continue...")?;
    output.flush()?;
    read_line(input)?;
    Ok(())
}
