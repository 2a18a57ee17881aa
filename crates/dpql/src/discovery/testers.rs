//! Uniqueness, inclusion and functional-dependency checks over projections.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use super::projection::{project, ColumnSet};
use crate::error::Result;
use crate::input::Dataset;

/// Whether no two rows of `dataset` share the same tuple on `columns`.
///
/// A dataset with zero rows is unique on every column-set.
pub fn is_unique(dataset: &Dataset, columns: &ColumnSet) -> Result<bool> {
    let projection = project(dataset, columns)?;
    let mut seen = HashSet::with_capacity(projection.len());
    Ok(projection.keys().iter().all(|key| seen.insert(key)))
}

/// Whether every distinct left tuple also occurs among the right tuples.
///
/// Set containment: duplicate left values need only one right occurrence.
pub fn is_subset(
    left: &Dataset,
    left_columns: &ColumnSet,
    right: &Dataset,
    right_columns: &ColumnSet,
) -> Result<bool> {
    let left_projection = project(left, left_columns)?;
    let right_projection = project(right, right_columns)?;
    let right_set = right_projection.distinct();

    Ok(left_projection
        .keys()
        .iter()
        .all(|key| right_set.contains(key)))
}

/// Whether equal `determinant` tuples always imply equal `dependent` tuples.
pub fn is_functional_dependency(
    dataset: &Dataset,
    determinant: &ColumnSet,
    dependent: &ColumnSet,
) -> Result<bool> {
    let left = project(dataset, determinant)?;
    let right = project(dataset, dependent)?;

    let mut mapping = HashMap::with_capacity(left.len());
    for (lhs, rhs) in left.keys().iter().zip(right.keys()) {
        match mapping.entry(lhs) {
            Entry::Occupied(first) => {
                if *first.get() != rhs {
                    return Ok(false);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(rhs);
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_is_unique() {
        let orders = orders();
        assert!(is_unique(&orders, &ColumnSet::single("OrderID")).unwrap());
        assert!(!is_unique(&orders, &ColumnSet::single("CustomerID")).unwrap());
        assert!(is_unique(&orders, &ColumnSet::pair("OrderID", "CustomerID")).unwrap());
    }

    #[test]
    fn test_is_unique_empty_dataset() {
        let empty = Dataset::from_rows("E", &["a"], vec![]);
        assert!(is_unique(&empty, &ColumnSet::single("a")).unwrap());
    }

    #[test]
    fn test_is_unique_nulls_collide() {
        let dataset = Dataset::from_rows("N", &["A"], vec![vec![None], vec![None]]);
        assert!(!is_unique(&dataset, &ColumnSet::single("A")).unwrap());
    }

    #[test]
    fn test_is_subset() {
        let orders = orders();
        let customers = customers();
        let cid = ColumnSet::single("CustomerID");

        assert!(is_subset(&orders, &cid, &customers, &cid).unwrap());
        assert!(!is_subset(&customers, &cid, &orders, &ColumnSet::single("OrderID")).unwrap());
    }

    #[test]
    fn test_is_subset_single_counter_example() {
        let left = Dataset::from_rows("L", &["x"], vec![vec![Some("1")], vec![Some("9")]]);
        let right = Dataset::from_rows("R", &["y"], vec![vec![Some("1")], vec![Some("2")]]);
        let x = ColumnSet::single("x");
        let y = ColumnSet::single("y");
        assert!(!is_subset(&left, &x, &right, &y).unwrap());
    }

    #[test]
    fn test_is_subset_empty_left_is_vacuous() {
        let left = Dataset::from_rows("L", &["x"], vec![]);
        let right = Dataset::from_rows("R", &["y"], vec![]);
        assert!(is_subset(&left, &ColumnSet::single("x"), &right, &ColumnSet::single("y")).unwrap());
    }

    #[test]
    fn test_is_functional_dependency() {
        let t = Dataset::from_rows(
            "T",
            &["A", "B"],
            vec![vec![Some("1"), Some("x")], vec![Some("1"), Some("y")]],
        );
        let a = ColumnSet::single("A");
        let b = ColumnSet::single("B");

        assert!(!is_functional_dependency(&t, &a, &b).unwrap());
        assert!(is_functional_dependency(&t, &b, &a).unwrap());
    }

    #[test]
    fn test_fd_with_repeated_consistent_values() {
        let orders = orders();
        assert!(is_functional_dependency(
            &orders,
            &ColumnSet::single("OrderID"),
            &ColumnSet::single("CustomerID")
        )
        .unwrap());
        assert!(!is_functional_dependency(
            &orders,
            &ColumnSet::single("CustomerID"),
            &ColumnSet::single("OrderID")
        )
        .unwrap());
    }
}
