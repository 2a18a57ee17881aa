//! Free-text DPQL query classification.
//!
//! DPQL queries are written with predicate calls such as
//! `SELECT ... WHERE IND(a, b) AND UCC(b)`. Only the presence of the
//! predicates matters: the classifier picks one [`Operation`] and the engine
//! enumerates candidates itself.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::operation::Operation;
use crate::error::{DpqlError, Result};

static IND: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bind\s*\(").unwrap());
static UCC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bucc\s*\(").unwrap());
static FD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfd\s*\(").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A classified query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub select_columns: Vec<String>,
    pub operation: Operation,
}

impl From<Operation> for ParsedQuery {
    fn from(operation: Operation) -> Self {
        Self {
            select_columns: operation
                .select_columns()
                .iter()
                .map(|c| c.to_string())
                .collect(),
            operation,
        }
    }
}

/// Which predicates appear in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Predicates {
    ind: bool,
    ucc: bool,
    fd: bool,
}

impl Predicates {
    fn scan(text: &str) -> Self {
        let normalized = WHITESPACE.replace_all(text.trim(), " ").to_lowercase();
        Self {
            ind: IND.is_match(&normalized),
            ucc: UCC.is_match(&normalized),
            fd: FD.is_match(&normalized),
        }
    }

    fn operation(self) -> Operation {
        match self {
            Predicates { ind: true, ucc: true, .. } => Operation::FindForeignKeys,
            Predicates { ind: false, ucc: true, .. } => Operation::FindUniqueKeys,
            Predicates { fd: true, .. } => Operation::FindDependencies,
            Predicates { .. } => Operation::default(),
        }
    }
}

/// Pick the discovery operation for a query. Unrecognized text falls back to
/// foreign-key discovery.
pub fn classify(text: &str) -> Operation {
    Predicates::scan(text).operation()
}

/// Classify a query, rejecting blank text.
pub fn parse_query(text: &str) -> Result<ParsedQuery> {
    if text.trim().is_empty() {
        return Err(DpqlError::EmptyQuery);
    }
    Ok(classify(text).into())
}
