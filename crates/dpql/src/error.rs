//! Error types for the DPQL library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for DPQL operations.
#[derive(Debug, Error)]
pub enum DpqlError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record could not be turned into a dataset row.
    #[error("Parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    /// Empty input or no header to read column names from.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// The header row names the same column twice.
    #[error("Duplicate column name '{column}'")]
    DuplicateColumn { column: String },

    /// No dataset is registered under the requested name.
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// Query text was blank.
    #[error("Query is required")]
    EmptyQuery,

    /// A row's length does not match the dataset's column count.
    #[error("Dataset '{dataset}' has a ragged row {row}: expected {expected} cells, found {found}")]
    RaggedRow {
        dataset: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A column-set names a column the dataset does not have.
    #[error("Dataset '{dataset}' has no column '{column}'")]
    UnknownColumn { dataset: String, column: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DpqlError {
    /// Whether the error was caused by caller input rather than a broken dataset.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            DpqlError::RaggedRow { .. } | DpqlError::UnknownColumn { .. } | DpqlError::Json(_)
        )
    }
}

/// Result type alias for DPQL operations.
pub type Result<T> = std::result::Result<T, DpqlError>;
