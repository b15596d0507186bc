//! Error types for the Roman numeral calculator.
//!
//! [`CalcError`] covers failures that abort the whole run. [`LineError`] and
//! [`NumeralError`] are per-line failures that get reported and skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for run-level operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors that terminate the run.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Failed to read or write one of the open streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One of the input/output/log streams could not be opened
    #[error("Could not open {}: {source}", .path.display())]
    ResourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file exists but could not be used
    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

/// A token that is not made of Roman numeral letters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("invalid character '{ch}' at position {position} in numeral '{token}'")]
    InvalidCharacter {
        token: String,
        ch: char,
        position: usize,
    },
}

/// Recoverable failure of a single input line.
///
/// The `Display` text is the user-facing diagnostic written to the output
/// stream as `"{error} in line: {raw}"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// Line does not split into `<numeral> <op> <numeral>`
    #[error("Invalid input format")]
    InvalidFormat,

    /// Line is longer than the configured maximum record length
    #[error("Invalid input format")]
    LineTooLong { len: usize, max: usize },

    #[error("Invalid Roman numeral")]
    InvalidNumeral(#[from] NumeralError),

    #[error("Invalid operation")]
    UnsupportedOperator(char),

    #[error("Invalid operation")]
    DivisionByZero,

    /// Result does not fit in an `i64`
    #[error("Invalid operation")]
    Overflow { op: char },
}

impl LineError {
    /// Diagnostic note written to the process log for this failure.
    pub fn log_note(&self) -> String {
        match self {
            LineError::InvalidFormat => "Invalid input format.".to_string(),
            LineError::LineTooLong { len, max } => format!(
                "Invalid input format (line has {} bytes, maximum is {}).",
                len, max
            ),
            LineError::InvalidNumeral(e) => format!("Invalid Roman numeral in line ({}).", e),
            LineError::UnsupportedOperator(op) => format!("Invalid operation '{}'.", op),
            LineError::DivisionByZero => "Invalid operation '/' (division by zero).".to_string(),
            LineError::Overflow { op } => format!("Invalid operation '{}' (result overflows).", op),
        }
    }
}
