//! API request handlers.

mod datasets;
mod execute;
mod health;

pub use datasets::*;
pub use execute::*;
pub use health::*;
