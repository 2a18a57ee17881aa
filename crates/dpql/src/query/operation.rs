//! Discovery operation tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three discovery drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Single columns and column pairs whose values are pairwise distinct.
    FindUniqueKeys,
    /// Single-column inclusion dependencies into a unique column of another dataset.
    #[default]
    FindForeignKeys,
    /// Single-column functional dependencies within a dataset.
    FindDependencies,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::FindUniqueKeys,
        Operation::FindForeignKeys,
        Operation::FindDependencies,
    ];

    /// Wire tag, e.g. `find_foreign_keys`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FindUniqueKeys => "find_unique_keys",
            Operation::FindForeignKeys => "find_foreign_keys",
            Operation::FindDependencies => "find_dependencies",
        }
    }

    /// Column headers reported back to the caller for this operation.
    pub fn select_columns(&self) -> &'static [&'static str] {
        match self {
            Operation::FindUniqueKeys => &["UniqueKey"],
            Operation::FindForeignKeys => &["ForeignKey", "Key"],
            Operation::FindDependencies => &["Determinant", "Dependent"],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "find_unique_keys" | "unique_keys" | "ucc" => Ok(Operation::FindUniqueKeys),
            "find_foreign_keys" | "foreign_keys" | "ind" => Ok(Operation::FindForeignKeys),
            "find_dependencies" | "dependencies" | "fd" => Ok(Operation::FindDependencies),
            _ => Err(format!(
                "Unknown operation: {}. Use find_unique_keys, find_foreign_keys, or find_dependencies.",
                s
            )),
        }
    }
}
