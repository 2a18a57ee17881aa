//! Main Profiler struct and public API.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::discovery::{self, QueryResult};
use crate::error::Result;
use crate::input::{DatasetSummary, Parser, ParserConfig};
use crate::query::{parse_query, Operation, ParsedQuery};
use crate::registry::DatasetRegistry;

/// Configuration for a [`Profiler`].
#[derive(Debug, Clone, Default)]
pub struct ProfilerConfig {
    /// Parser configuration used for every load.
    pub parser: ParserConfig,
}

/// A classified query together with its result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub parsed: ParsedQuery,
    pub result: QueryResult,
}

/// Loads datasets into a registry and runs discovery over it.
///
/// Cloning a profiler shares the registry.
#[derive(Debug, Clone)]
pub struct Profiler {
    registry: Arc<DatasetRegistry>,
    parser: Parser,
}

impl Profiler {
    /// Create a new profiler with default configuration and an empty registry.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        Self {
            registry: Arc::new(DatasetRegistry::new()),
            parser: Parser::with_config(config.parser),
        }
    }

    /// Use an existing registry instead of a fresh one.
    pub fn with_registry(mut self, registry: Arc<DatasetRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &Arc<DatasetRegistry> {
        &self.registry
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Parse delimited text and register it as `name`.
    pub fn load_str(&self, name: &str, text: &str) -> Result<DatasetSummary> {
        let dataset = self.parser.parse_str(name, text)?;
        Ok(self.registry.add(dataset))
    }

    /// Parse a file and register it under its file stem.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<DatasetSummary> {
        let dataset = self.parser.parse_file(path)?;
        Ok(self.registry.add(dataset))
    }

    /// Run one operation over a fresh snapshot of the registry.
    pub fn execute(&self, operation: Operation) -> QueryResult {
        let snapshot = self.registry.snapshot();
        debug!(%operation, datasets = snapshot.len(), "executing");
        discovery::execute(operation, &snapshot)
    }

    /// Classify free-text DPQL and run the chosen operation.
    pub fn execute_query(&self, text: &str) -> Result<QueryOutcome> {
        let parsed = parse_query(text)?;
        let result = self.execute(parsed.operation);
        Ok(QueryOutcome { parsed, result })
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}
