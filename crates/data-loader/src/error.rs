//! Error types for the data-loader crate.
//!
//! Only structural problems are errors here. A missing catalog or store file
//! is not an error (it loads as empty), but a catalog without the columns we
//! need, a row we cannot split, or a store that is not valid JSON is.

use thiserror::Error;

/// Errors that can occur while loading or saving course data
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Row has a different number of fields than the header
    #[error("Expected {expected} fields but found {found} in line {line} of {file}")]
    FieldCountMismatch {
        file: String,
        expected: usize,
        found: usize,
        line: usize,
    },

    /// The catalog header lacks a column the recommenders depend on
    #[error("{file} must contain a '{column}' column")]
    MissingColumn { file: String, column: String },

    /// A JSON store could not be read or written
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
