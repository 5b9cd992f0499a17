//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// The amount entered for an expense could not be parsed as a number
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// A date string did not match the expected YYYY-MM-DD format
    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A line of the expense file could not be parsed
    #[error("Corrupt expense file at line {line}: {reason}")]
    CorruptFile { line: u64, reason: String },

    /// The expense file could not be read
    #[error("Failed to read expense file: {0}")]
    Read(#[source] std::io::Error),

    /// The expense file could not be written
    #[error("Failed to write expense file: {0}")]
    Write(#[source] std::io::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SpendlogError {
    /// Create a corrupt-file error for a specific line of the expense file
    pub fn corrupt_line(line: u64, reason: impl Into<String>) -> Self {
        Self::CorruptFile {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a user-input validation error (amount or date)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::InvalidDate(_))
    }

    /// Check if this is a corrupt-file error
    pub fn is_corrupt_file(&self) -> bool {
        matches!(self, Self::CorruptFile { .. })
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;
