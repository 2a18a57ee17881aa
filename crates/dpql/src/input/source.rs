//! In-memory dataset and its metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DpqlError, Result};

/// A single cell. `None` is a missing value.
pub type Cell = Option<String>;

/// Metadata about a registered dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    /// Registry key.
    pub name: String,
    /// Column names in declared order.
    pub columns: Vec<String>,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Where the data came from (file name or caller-supplied label).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// When the dataset was ingested.
    pub loaded_at: DateTime<Utc>,
}

/// A named table of nullable string cells.
///
/// Datasets are immutable once built; re-uploading replaces the whole object.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    source: Option<String>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Create a new dataset. Row shape is not checked here; see [`Dataset::check_shape`].
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
            source: None,
            loaded_at: Utc::now(),
        }
    }

    /// Convenience constructor from string literals, mostly for tests and demos.
    pub fn from_rows<S: AsRef<str>>(
        name: impl Into<String>,
        columns: &[S],
        rows: Vec<Vec<Option<&str>>>,
    ) -> Self {
        let columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.map(str::to_string)).collect())
            .collect();
        Self::new(name, columns, rows)
    }

    /// Attach a source label.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get a specific cell value. Missing cells read as `None`.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Verify every row has exactly one cell per column.
    pub fn check_shape(&self) -> Result<()> {
        let expected = self.columns.len();
        match self.rows.iter().position(|row| row.len() != expected) {
            Some(row) => Err(DpqlError::RaggedRow {
                dataset: self.name.clone(),
                row,
                expected,
                found: self.rows[row].len(),
            }),
            None => Ok(()),
        }
    }

    /// Registry metadata for this dataset.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            name: self.name.clone(),
            columns: self.columns.clone(),
            row_count: self.rows.len(),
            source: self.source.clone(),
            loaded_at: self.loaded_at,
        }
    }
}
