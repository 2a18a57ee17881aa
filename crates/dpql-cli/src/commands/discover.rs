//! Discover commands - run one discovery operation directly.

use dpql::Operation;

use crate::cli::LoadArgs;

pub fn run(operation: Operation, load: LoadArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let profiler = super::load_profiler(&load)?;
    let result = profiler.execute(operation);
    super::print_result(&result, json)
}
