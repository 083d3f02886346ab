//! Error types for data loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for data loading operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading and normalizing a source table.
#[derive(Debug, Error)]
pub enum DataError {
    /// Source file does not exist at the configured path
    #[error("data file not found: {path}")]
    NotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// A mapped source column is absent from the file
    #[error("{path}: missing required column {column:?}")]
    MissingColumn {
        /// File the column was expected in
        path: PathBuf,
        /// Source column name that was not found
        column: String,
    },

    /// A column could not be cast to its canonical numeric dtype
    #[error("{path}: column {column:?} is not numeric: {reason}")]
    NonNumeric {
        /// File containing the offending column
        path: PathBuf,
        /// Source column name
        column: String,
        /// Underlying cast failure
        reason: String,
    },

    /// A source table contains more than one row for a (country, year) key
    #[error("{path}: duplicate key ({country}, {year})")]
    DuplicateKey {
        /// File containing the duplicate
        path: PathBuf,
        /// Country of the first duplicated key
        country: String,
        /// Year of the first duplicated key
        year: i32,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
