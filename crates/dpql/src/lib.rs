//! DPQL: dependency discovery over in-memory tabular datasets.
//!
//! DPQL profiles a set of named datasets and reports structural relationships
//! between their columns:
//!
//! - **Unique keys**: columns or column pairs whose values never repeat
//! - **Foreign keys**: columns whose values all appear in a unique column of another dataset
//! - **Functional dependencies**: columns whose value fixes another column's value
//!
//! Cells are compared as plain strings; missing cells equal the empty string.
//!
//! # Example
//!
//! ```
//! use dpql::{Operation, Profiler};
//!
//! let profiler = Profiler::new();
//! profiler.load_str("Orders", "OrderID,CustomerID\n1,10\n2,10\n3,20\n").unwrap();
//! profiler.load_str("Customers", "CustomerID,Name\n10,Ann\n20,Bo\n").unwrap();
//!
//! let result = profiler.execute(Operation::FindForeignKeys);
//! assert!(result.tables[0]
//!     .rows
//!     .contains(&vec!["Orders.CustomerID".into(), "Customers.CustomerID".into()]));
//! ```

pub mod discovery;
pub mod error;
pub mod input;
pub mod query;
pub mod registry;

mod profiler;

pub use crate::profiler::{Profiler, ProfilerConfig, QueryOutcome};
pub use discovery::{ColumnSet, QueryResult, ResultTable};
pub use error::{DpqlError, Result};
pub use input::{Dataset, DatasetSummary, Parser, ParserConfig};
pub use query::{classify, parse_query, Operation, ParsedQuery};
pub use registry::{DatasetRegistry, Snapshot};
