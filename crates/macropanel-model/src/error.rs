//! Error types for panel construction.

use thiserror::Error;

/// Result type for panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;

/// Errors that can occur while merging and splitting the panel.
#[derive(Debug, Error)]
pub enum PanelError {
    /// A frame does not carry the canonical schema required for the merge
    #[error("schema mismatch in {table} table: column {column:?} {detail}")]
    SchemaMismatch {
        /// Which input table is malformed
        table: String,
        /// Canonical column that failed validation
        column: String,
        /// What was wrong with it
        detail: String,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
