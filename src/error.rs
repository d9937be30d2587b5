//! Error types for slide-search.
//!
//! Only input handling can fail: malformed boards, label counts that do not
//! fit the chosen puzzle, and I/O or configuration problems. Exhausting a
//! search frontier is a normal result (`None`), never an `Error`.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board must have {expected} rows, got {got}")]
    InvalidRowCount { expected: usize, got: usize },

    #[error("row {row} must have {expected} cells, got {got}")]
    InvalidRowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid label '{label}' at row {row}, column {col} (expected a single digit)")]
    InvalidLabel { label: String, row: usize, col: usize },

    #[error("label {label} must appear {expected} time(s), found {got}")]
    LabelCount { label: u8, expected: usize, got: usize },

    #[error("{side} must own exactly {expected} tokens, found {got}")]
    TokenCount {
        side: String,
        expected: usize,
        got: usize,
    },

    #[error("invalid starting player '{0}' (expected 1 or 2)")]
    InvalidSide(String),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Wrap an I/O error with a short description of what was attempted.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
