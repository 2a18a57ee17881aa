//! Query classification into discovery operations.

mod classifier;
mod operation;

pub use classifier::{classify, parse_query, ParsedQuery};
pub use operation::Operation;
