//! Error types for the ticket-triage library.
//!
//! All errors are represented by the [`TriageError`] enum. The crate-wide
//! [`Result`] alias is used by every fallible operation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ticket-triage operations.
#[derive(Error, Debug)]
pub enum TriageError {
    /// The training data file is missing or unreadable.
    #[error("data source not found: {path}")]
    DataSourceNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// A prediction was requested before the pipeline was fitted.
    #[error("model has not been fitted")]
    ModelNotFitted,

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument passed to a library operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors (file operations, console, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing errors.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TriageError.
pub type Result<T> = std::result::Result<T, TriageError>;

impl TriageError {
    /// Create a new data source error for the given path.
    pub fn data_source_not_found<P: Into<PathBuf>>(path: P) -> Self {
        TriageError::DataSourceNotFound { path: path.into() }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TriageError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TriageError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TriageError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = TriageError::invalid_argument("Test argument error");
        assert_eq!(error.to_string(), "Invalid argument: Test argument error");

        let error = TriageError::data_source_not_found("tickets.csv");
        assert_eq!(error.to_string(), "data source not found: tickets.csv");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let triage_error = TriageError::from(io_error);

        match triage_error {
            TriageError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
