//! Datasets command - show what was loaded.

use colored::Colorize;

use crate::cli::LoadArgs;

pub fn run(load: LoadArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let profiler = super::load_profiler(&load)?;
    let datasets = profiler.registry().list_metadata();

    if json {
        println!("{}", serde_json::to_string_pretty(&datasets)?);
        return Ok(());
    }

    if datasets.is_empty() {
        println!("{}", "No datasets loaded.".yellow());
        return Ok(());
    }

    for dataset in &datasets {
        println!(
            "{} ({} rows, {} columns)",
            dataset.name.cyan().bold(),
            dataset.row_count,
            dataset.columns.len()
        );
        if let Some(source) = &dataset.source {
            println!("  Source:  {}", source);
        }
        println!("  Columns: {}", dataset.columns.join(", "));
    }

    Ok(())
}
