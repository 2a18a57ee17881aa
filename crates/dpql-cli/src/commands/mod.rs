//! CLI command implementations.

pub mod datasets;
pub mod discover;
pub mod query;
pub mod serve;

use colored::Colorize;
use dpql::{Profiler, QueryResult};

use crate::cli::LoadArgs;

/// Build a profiler and register every file in `load`.
pub(crate) fn load_profiler(load: &LoadArgs) -> Result<Profiler, Box<dyn std::error::Error>> {
    let profiler = Profiler::with_config(load.profiler_config()?);

    for file in &load.files {
        let summary = profiler.load_file(file)?;
        tracing::debug!(
            dataset = %summary.name,
            rows = summary.row_count,
            path = %file.display(),
            "loaded file"
        );
    }

    Ok(profiler)
}

/// Print a query result as text tables or JSON.
pub(crate) fn print_result(result: &QueryResult, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    for table in &result.tables {
        println!("{}", table);
        println!(
            "{} {}",
            table.row_count().to_string().white().bold(),
            if table.row_count() == 1 { "row" } else { "rows" }
        );
        println!();
    }

    for warning in &result.warnings {
        println!("{} {}", "Warning:".yellow(), warning);
    }

    Ok(())
}
