//! Integration tests for DPQL.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use tempfile::NamedTempFile;

use dpql::discovery::{
    execute, find_dependencies, find_foreign_keys, find_unique_keys, is_functional_dependency,
    is_unique, NO_DATASETS_WARNING,
};
use dpql::{ColumnSet, Dataset, DatasetRegistry, DpqlError, Operation, Profiler, Snapshot};

/// Helper to create a temporary file with given content.
fn create_test_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn orders() -> Dataset {
    Dataset::from_rows(
        "Orders",
        &["OrderID", "CustomerID"],
        vec![
            vec![Some("1"), Some("10")],
            vec![Some("2"), Some("10")],
            vec![Some("3"), Some("20")],
        ],
    )
}

fn customers() -> Dataset {
    Dataset::from_rows(
        "Customers",
        &["CustomerID", "Name"],
        vec![vec![Some("10"), Some("Ann")], vec![Some("20"), Some("Bo")]],
    )
}

fn first_cells(rows: &[Vec<String>]) -> Vec<&str> {
    rows.iter().map(|r| r[0].as_str()).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_orders_customers_unique_keys() {
    let snapshot = Snapshot::from_datasets(vec![orders(), customers()]);
    let table = find_unique_keys(&snapshot);

    assert_eq!(table.name, "UniqueKeys");
    assert_eq!(
        first_cells(&table.rows),
        vec![
            "Orders.OrderID",
            "Orders.OrderID, CustomerID",
            "Customers.CustomerID",
            "Customers.Name",
            "Customers.CustomerID, Name",
        ]
    );
}

#[test]
fn test_orders_customers_foreign_key() {
    let snapshot = Snapshot::from_datasets(vec![orders(), customers()]);
    let table = find_foreign_keys(&snapshot);

    assert_eq!(table.name, "ForeignKeys");
    assert_eq!(table.columns, vec!["ForeignKey", "Key"]);
    assert_eq!(
        table.rows,
        vec![vec![
            "Orders.CustomerID".to_string(),
            "Customers.CustomerID".to_string()
        ]]
    );
}

#[test]
fn test_conflicting_determinant_is_not_fd() {
    let t = Dataset::from_rows(
        "T",
        &["A", "B"],
        vec![vec![Some("1"), Some("x")], vec![Some("1"), Some("y")]],
    );
    assert!(!is_functional_dependency(&t, &ColumnSet::single("A"), &ColumnSet::single("B")).unwrap());

    let table = find_dependencies(&Snapshot::from_datasets(vec![t]));
    assert_eq!(table.rows, vec![vec!["T.B".to_string(), "T.A".to_string()]]);
}

#[test]
fn test_empty_registry_warns() {
    let profiler = Profiler::new();
    let result = profiler.execute(Operation::FindForeignKeys);

    assert!(result.tables.is_empty());
    assert_eq!(result.warnings, vec![NO_DATASETS_WARNING]);
    assert_eq!(
        NO_DATASETS_WARNING,
        "No datasets loaded. Please upload CSV files first."
    );
}

#[test]
fn test_nulls_are_not_unique() {
    let n = Dataset::from_rows("N", &["A"], vec![vec![None], vec![None]]);
    assert!(!is_unique(&n, &ColumnSet::single("A")).unwrap());
}

// =============================================================================
// Driver behavior
// =============================================================================

#[test]
fn test_drivers_are_deterministic() {
    let snapshot = Snapshot::from_datasets(vec![orders(), customers()]);

    for op in Operation::ALL {
        let first = serde_json::to_string(&execute(op, &snapshot)).unwrap();
        let second = serde_json::to_string(&execute(op, &snapshot)).unwrap();
        assert_eq!(first, second, "{} output changed between runs", op);
    }
}

#[test]
fn test_foreign_keys_never_self_referencing() {
    let snapshot = Snapshot::from_datasets(vec![orders(), customers()]);
    let table = find_foreign_keys(&snapshot);

    for row in &table.rows {
        let left = row[0].split('.').next().unwrap();
        let right = row[1].split('.').next().unwrap();
        assert_ne!(left, right);
    }
}

#[test]
fn test_value_identical_columns_report_both_directions() {
    let t = Dataset::from_rows(
        "T",
        &["code", "copy"],
        vec![vec![Some("a"), Some("a")], vec![Some("b"), Some("b")]],
    );
    let table = find_dependencies(&Snapshot::from_datasets(vec![t]));

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0], vec!["T.code", "T.copy"]);
    assert_eq!(table.rows[1], vec!["T.copy", "T.code"]);
}

#[test]
fn test_each_execution_returns_one_table() {
    let profiler = Profiler::new();
    profiler.registry().add(orders());

    for op in Operation::ALL {
        assert_eq!(profiler.execute(op).tables.len(), 1);
    }
}

// =============================================================================
// Ingestion and registry
// =============================================================================

#[test]
fn test_load_file_uses_file_stem() {
    let file = create_test_file(".csv", "id,name\n1,a\n2,b\n");
    let profiler = Profiler::new();
    let summary = profiler.load_file(file.path()).expect("Load failed");

    let stem = file.path().file_stem().unwrap().to_string_lossy().into_owned();
    assert_eq!(summary.name, stem);
    assert_eq!(summary.row_count, 2);
    assert!(summary.source.unwrap().ends_with(".csv"));
}

#[test]
fn test_load_tsv_auto_detect() {
    let file = create_test_file(".tsv", "sample_id\tdiagnosis\nS001\tCD\nS002\tUC\n");
    let profiler = Profiler::new();
    let summary = profiler.load_file(file.path()).expect("Load failed");

    assert_eq!(summary.columns, vec!["sample_id", "diagnosis"]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let profiler = Profiler::new();
    let err = profiler.load_file("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, DpqlError::Io { .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_reupload_replaces_dataset() {
    let profiler = Profiler::new();
    profiler.load_str("t", "a\n1\n1\n").unwrap();
    assert!(profiler.execute(Operation::FindUniqueKeys).tables[0].is_empty());

    profiler.load_str("t", "a\n1\n2\n").unwrap();
    let result = profiler.execute(Operation::FindUniqueKeys);
    assert_eq!(first_cells(&result.tables[0].rows), vec!["t.a"]);
}

#[test]
fn test_snapshot_survives_concurrent_mutation() {
    let registry = Arc::new(DatasetRegistry::new());
    registry.add(orders());
    registry.add(customers());

    let snapshot = registry.snapshot();
    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            registry.remove_all();
            registry.add(Dataset::from_rows("Other", &["z"], vec![]));
        })
    };
    writer.join().unwrap();

    let table = find_foreign_keys(&snapshot);
    assert_eq!(table.row_count(), 1);
    assert_eq!(registry.list_metadata()[0].name, "Other");
}
