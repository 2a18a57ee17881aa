//! Discovery drivers: enumerate candidate column-sets and apply the testers.
//!
//! Every driver walks datasets in registry order and columns in declared
//! order, so repeated runs over the same snapshot produce identical tables.
//! Datasets that fail [`Dataset::check_shape`] are skipped here and reported
//! as warnings by [`execute`].

use std::time::Instant;

use tracing::{debug, warn};

use super::projection::ColumnSet;
use super::result::{QueryResult, ResultTable};
use super::testers::{is_functional_dependency, is_subset, is_unique};
use crate::error::Result;
use crate::input::Dataset;
use crate::query::Operation;
use crate::registry::Snapshot;

/// Warning returned when there is nothing to profile.
pub const NO_DATASETS_WARNING: &str = "No datasets loaded. Please upload CSV files first.";

/// Datasets fit for discovery, in enumeration order.
fn well_formed(snapshot: &Snapshot) -> Vec<(&str, &Dataset)> {
    snapshot
        .iter()
        .filter(|(_, dataset)| dataset.check_shape().is_ok())
        .collect()
}

/// Collapse a tester result. Errors cannot arise for well-formed datasets and
/// columns taken from the dataset itself; if one does, the candidate fails.
fn holds(result: Result<bool>) -> bool {
    result.unwrap_or_else(|e| {
        warn!(error = %e, "candidate check failed");
        false
    })
}

/// Report every single column and unordered column pair that is unique.
pub fn find_unique_keys(snapshot: &Snapshot) -> ResultTable {
    let started = Instant::now();
    let mut table = ResultTable::new("UniqueKeys", &["Key"]);

    for (name, dataset) in well_formed(snapshot) {
        let columns = dataset.columns();

        for column in columns {
            if holds(is_unique(dataset, &ColumnSet::single(column.as_str()))) {
                table.push_row(vec![format!("{}.{}", name, column)]);
            }
        }

        for i in 0..columns.len() {
            for j in (i + 1)..columns.len() {
                let pair = ColumnSet::pair(columns[i].as_str(), columns[j].as_str());
                if holds(is_unique(dataset, &pair)) {
                    table.push_row(vec![format!("{}.{}", name, pair)]);
                }
            }
        }
    }

    debug!(
        found = table.row_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "unique key discovery finished"
    );
    table
}

/// Report `(L.cL, R.cR)` for every column `cR` unique in `R` whose values
/// contain all values of `cL`, over ordered pairs of distinct datasets.
pub fn find_foreign_keys(snapshot: &Snapshot) -> ResultTable {
    let started = Instant::now();
    let mut table = ResultTable::new("ForeignKeys", &["ForeignKey", "Key"]);
    let datasets = well_formed(snapshot);

    // Per dataset, which single columns can serve as a referenced key
    let unique_columns: Vec<Vec<bool>> = datasets
        .iter()
        .map(|(_, dataset)| {
            dataset
                .columns()
                .iter()
                .map(|c| holds(is_unique(dataset, &ColumnSet::single(c.as_str()))))
                .collect()
        })
        .collect();

    for (i, (left_name, left)) in datasets.iter().enumerate() {
        for (j, (right_name, right)) in datasets.iter().enumerate() {
            if i == j {
                continue;
            }

            for left_column in left.columns() {
                let left_set = ColumnSet::single(left_column.as_str());

                for (k, right_column) in right.columns().iter().enumerate() {
                    if !unique_columns[j][k] {
                        continue;
                    }
                    let right_set = ColumnSet::single(right_column.as_str());
                    if holds(is_subset(left, &left_set, right, &right_set)) {
                        table.push_row(vec![
                            format!("{}.{}", left_name, left_column),
                            format!("{}.{}", right_name, right_column),
                        ]);
                    }
                }
            }
        }
    }

    debug!(
        datasets = datasets.len(),
        found = table.row_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "foreign key discovery finished"
    );
    table
}

/// Report every ordered pair of distinct columns `(X, Y)` with `X -> Y`.
///
/// Both directions are tested and reported independently.
pub fn find_dependencies(snapshot: &Snapshot) -> ResultTable {
    let started = Instant::now();
    let mut table = ResultTable::new("FunctionalDependencies", &["Determinant", "Dependent"]);

    for (name, dataset) in well_formed(snapshot) {
        let columns = dataset.columns();

        for (i, determinant) in columns.iter().enumerate() {
            for (j, dependent) in columns.iter().enumerate() {
                if i == j {
                    continue;
                }
                let lhs = ColumnSet::single(determinant.as_str());
                let rhs = ColumnSet::single(dependent.as_str());
                if holds(is_functional_dependency(dataset, &lhs, &rhs)) {
                    table.push_row(vec![
                        format!("{}.{}", name, determinant),
                        format!("{}.{}", name, dependent),
                    ]);
                }
            }
        }
    }

    debug!(
        found = table.row_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "functional dependency discovery finished"
    );
    table
}

/// Run one operation over a snapshot.
///
/// An empty snapshot yields no tables and a warning. Otherwise exactly one
/// table is returned; an empty table and each malformed dataset add a warning.
pub fn execute(operation: Operation, snapshot: &Snapshot) -> QueryResult {
    let mut result = QueryResult::default();

    if snapshot.is_empty() {
        result.warnings.push(NO_DATASETS_WARNING.to_string());
        return result;
    }

    for (_, dataset) in snapshot.iter() {
        if let Err(e) = dataset.check_shape() {
            warn!(dataset = dataset.name(), error = %e, "excluding dataset from discovery");
            result
                .warnings
                .push(format!("Skipped dataset '{}': {}", dataset.name(), e));
        }
    }

    let table = match operation {
        Operation::FindUniqueKeys => find_unique_keys(snapshot),
        Operation::FindForeignKeys => find_foreign_keys(snapshot),
        Operation::FindDependencies => find_dependencies(snapshot),
    };

    if table.is_empty() {
        result.warnings.push(format!(
            "No {} found in the current datasets.",
            operation.as_str().replace('_', " ")
        ));
    }

    result.tables.push(table);
    result
}
