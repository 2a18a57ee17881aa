//! DPQL CLI - dependency discovery over CSV datasets.

mod cli;
mod commands;
mod logging;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use dpql::Operation;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Query { query, load, json } => commands::query::run(query, load, json),

        Commands::Keys { load, json } => {
            commands::discover::run(Operation::FindUniqueKeys, load, json)
        }

        Commands::ForeignKeys { load, json } => {
            commands::discover::run(Operation::FindForeignKeys, load, json)
        }

        Commands::Dependencies { load, json } => {
            commands::discover::run(Operation::FindDependencies, load, json)
        }

        Commands::Discover {
            operation,
            load,
            json,
        } => commands::discover::run(operation, load, json),

        Commands::Datasets { load, json } => commands::datasets::run(load, json),

        Commands::Serve { load, port, host } => commands::serve::run(load, host, port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
