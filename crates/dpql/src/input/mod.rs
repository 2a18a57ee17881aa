//! Dataset ingestion and the in-memory dataset model.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{Cell, Dataset, DatasetSummary};
