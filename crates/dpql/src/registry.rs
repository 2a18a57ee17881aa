//! Shared dataset store with atomic snapshots.
//!
//! The registry is the only writable state in the system. Discovery never
//! reads it directly: each query takes a [`Snapshot`] up front and works on
//! that, so uploads and deletions that land mid-query are invisible to it.

use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use tracing::info;

use crate::error::{DpqlError, Result};
use crate::input::{Dataset, DatasetSummary};

type DatasetMap = IndexMap<String, Arc<Dataset>>;

/// Immutable view of the registry, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    datasets: Arc<DatasetMap>,
}

impl Snapshot {
    /// Build a snapshot directly from datasets, keyed by their names.
    pub fn from_datasets(datasets: impl IntoIterator<Item = Dataset>) -> Self {
        let datasets = datasets
            .into_iter()
            .map(|d| (d.name().to_string(), Arc::new(d)))
            .collect();
        Self {
            datasets: Arc::new(datasets),
        }
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.datasets.get(name).map(Arc::as_ref)
    }

    /// Datasets with their registry names, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dataset)> {
        self.datasets.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

/// Thread-safe name → dataset store.
///
/// Mutations are copy-on-write: a snapshot held by an in-flight query keeps
/// the old map alive while writers swap in a new one.
#[derive(Debug, Default)]
pub struct DatasetRegistry {
    inner: RwLock<Arc<DatasetMap>>,
}

impl DatasetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dataset under its own name, replacing any previous dataset
    /// with that name in place.
    pub fn add(&self, dataset: Dataset) -> DatasetSummary {
        let summary = dataset.summary();
        let name = dataset.name().to_string();

        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = Arc::make_mut(&mut guard)
            .insert(name.clone(), Arc::new(dataset))
            .is_some();
        drop(guard);

        info!(
            dataset = %name,
            rows = summary.row_count,
            columns = summary.columns.len(),
            replaced,
            "registered dataset"
        );
        summary
    }

    /// Remove a dataset by name.
    pub fn remove(&self, name: &str) -> Result<Arc<Dataset>> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if !guard.contains_key(name) {
            return Err(DpqlError::DatasetNotFound(name.to_string()));
        }
        let removed = Arc::make_mut(&mut guard)
            .shift_remove(name)
            .ok_or_else(|| DpqlError::DatasetNotFound(name.to_string()))?;
        drop(guard);

        info!(dataset = %name, "removed dataset");
        Ok(removed)
    }

    /// Remove every dataset, returning the removed names in order.
    pub fn remove_all(&self) -> Vec<String> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let old = std::mem::take(&mut *guard);
        drop(guard);

        let names: Vec<String> = old.keys().cloned().collect();
        info!(count = names.len(), "removed all datasets");
        names
    }

    /// Metadata for every dataset, in enumeration order.
    pub fn list_metadata(&self) -> Vec<DatasetSummary> {
        self.snapshot().iter().map(|(_, d)| d.summary()).collect()
    }

    /// Take an immutable view of the current contents.
    pub fn snapshot(&self) -> Snapshot {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Snapshot {
            datasets: Arc::clone(&guard),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<Dataset>> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(name: &str) -> Dataset {
        Dataset::from_rows(name, &["id"], vec![vec![Some("1")]])
    }

    #[test]
    fn test_add_and_list_preserves_order() {
        let registry = DatasetRegistry::new();
        registry.add(dataset("b"));
        registry.add(dataset("a"));
        registry.add(dataset("c"));

        let names: Vec<String> = registry.list_metadata().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let registry = DatasetRegistry::new();
        registry.add(dataset("a"));
        registry.add(dataset("b"));
        registry.add(Dataset::from_rows("a", &["x", "y"], vec![]));

        let list = registry.list_metadata();
        assert_eq!(list[0].name, "a");
        assert_eq!(list[0].columns, vec!["x", "y"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let registry = DatasetRegistry::new();
        assert!(matches!(
            registry.remove("nope"),
            Err(DpqlError::DatasetNotFound(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let registry = DatasetRegistry::new();
        for name in ["a", "b", "c"] {
            registry.add(dataset(name));
        }
        registry.remove("b").unwrap();

        let snapshot = registry.snapshot();
        let names: Vec<&str> = snapshot.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_snapshot_isolated_from_later_mutation() {
        let registry = DatasetRegistry::new();
        registry.add(dataset("a"));
        let snapshot = registry.snapshot();

        registry.add(dataset("b"));
        registry.remove("a").unwrap();

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("a").is_some());
        assert_eq!(registry.snapshot().len(), 1);
        assert!(registry.get("b").is_some());
    }

    #[test]
    fn test_remove_all() {
        let registry = DatasetRegistry::new();
        registry.add(dataset("x"));
        registry.add(dataset("y"));

        assert_eq!(registry.remove_all(), vec!["x", "y"]);
        assert!(registry.is_empty());
    }
}
