//! Query command - classify free-text DPQL and run it.

use colored::Colorize;

use crate::cli::LoadArgs;

pub fn run(query: String, load: LoadArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let profiler = super::load_profiler(&load)?;
    let outcome = profiler.execute_query(&query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Operation:".cyan().bold(),
        outcome.parsed.operation.to_string().white()
    );
    println!();

    super::print_result(&outcome.result, false)
}
