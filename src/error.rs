//! Custom error types for paycheck-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for paycheck-cli operations
#[derive(Error, Debug)]
pub enum PaycheckError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Bill table errors (missing columns, unparseable cells)
    #[error("Import error: {0}")]
    Import(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The paycheck schedule produced no paycheck where one must exist
    #[error("Schedule error: {0}")]
    Schedule(String),
}

impl PaycheckError {
    /// Create an import error pointing at a data row (1-based, excluding header)
    pub fn bad_row(row: usize, message: impl std::fmt::Display) -> Self {
        Self::Import(format!("row {}: {}", row, message))
    }

    /// Check if this is an import error
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import(_))
    }

    /// Check if this is a schedule invariant violation
    pub fn is_schedule(&self) -> bool {
        matches!(self, Self::Schedule(_))
    }
}

impl From<std::io::Error> for PaycheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for PaycheckError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Import(err.to_string())
        }
    }
}

/// Result type alias for paycheck-cli operations
pub type PaycheckResult<T> = Result<T, PaycheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PaycheckError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_bad_row_error() {
        let err = PaycheckError::bad_row(3, "invalid amount 'abc'");
        assert_eq!(err.to_string(), "Import error: row 3: invalid amount 'abc'");
        assert!(err.is_import());
        assert!(!err.is_schedule());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PaycheckError = io_err.into();
        assert!(matches!(err, PaycheckError::Io(_)));
    }
}
