//! Column-set projections and canonical tuple keys.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DpqlError, Result};
use crate::input::Dataset;

/// Separator used only when rendering a tuple for display.
pub const DISPLAY_SEPARATOR: &str = "|";

/// An ordered list of column names within one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSet {
    columns: Vec<String>,
}

impl ColumnSet {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn single(column: impl Into<String>) -> Self {
        Self {
            columns: vec![column.into()],
        }
    }

    pub fn pair(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            columns: vec![first.into(), second.into()],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// Resolve column names to positions in `dataset`.
    fn positions(&self, dataset: &Dataset) -> Result<Vec<usize>> {
        self.columns
            .iter()
            .map(|column| {
                dataset
                    .column_index(column)
                    .ok_or_else(|| DpqlError::UnknownColumn {
                        dataset: dataset.name().to_string(),
                        column: column.clone(),
                    })
            })
            .collect()
    }
}

impl fmt::Display for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.join(", "))
    }
}

/// The canonical form of one projected row.
///
/// Equality and hashing are structural over the component values, so two
/// tuples never collide just because a cell contains the display separator.
/// Missing cells canonicalize to `""` and compare equal to each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleKey<'a>(Vec<&'a str>);

impl<'a> TupleKey<'a> {
    pub fn values(&self) -> &[&'a str] {
        &self.0
    }

    /// `|`-joined rendering for logs and messages.
    pub fn canonical(&self) -> String {
        self.0.join(DISPLAY_SEPARATOR)
    }
}

/// One canonical tuple per dataset row, in row order.
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    keys: Vec<TupleKey<'a>>,
}

impl<'a> Projection<'a> {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[TupleKey<'a>] {
        &self.keys
    }

    /// The set of distinct tuples.
    pub fn distinct(&self) -> HashSet<&TupleKey<'a>> {
        self.keys.iter().collect()
    }
}

/// Project `dataset` onto `columns`.
///
/// Refuses datasets whose rows do not all match the column count, and
/// column-sets naming columns the dataset lacks.
pub fn project<'a>(dataset: &'a Dataset, columns: &ColumnSet) -> Result<Projection<'a>> {
    dataset.check_shape()?;
    let positions = columns.positions(dataset)?;

    let keys = dataset
        .rows()
        .iter()
        .map(|row| {
            TupleKey(
                positions
                    .iter()
                    .map(|&i| row[i].as_deref().unwrap_or(""))
                    .collect(),
            )
        })
        .collect();

    Ok(Projection { keys })
}
