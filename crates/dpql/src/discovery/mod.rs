//! Dependency discovery engine.
//!
//! Three testers decide one relationship each over column projections:
//!
//! - [`is_unique`]: a column-set is a candidate key (no two rows collide)
//! - [`is_subset`]: distinct values of one column-set are contained in another's
//! - [`is_functional_dependency`]: one column-set determines another
//!
//! The drivers enumerate single columns (and pairs, for keys) and apply the
//! testers. Arity is capped at two.

mod drivers;
mod projection;
mod result;
mod testers;

pub use drivers::{
    execute, find_dependencies, find_foreign_keys, find_unique_keys, NO_DATASETS_WARNING,
};
pub use projection::{project, ColumnSet, Projection, TupleKey, DISPLAY_SEPARATOR};
pub use result::{QueryResult, ResultTable};
pub use testers::{is_functional_dependency, is_subset, is_unique};
