//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use dpql::{Operation, ParserConfig, ProfilerConfig};

/// DPQL: discover keys, foreign keys and functional dependencies in CSV data
#[derive(Parser)]
#[command(name = "dpql")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a DPQL query and run it over the given files
    Query {
        /// DPQL query text, e.g. "SELECT * WHERE IND(a, b) AND UCC(b)"
        #[arg(value_name = "QUERY")]
        query: String,

        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find single and two-column unique keys
    Keys {
        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find single-column foreign keys between datasets
    ForeignKeys {
        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find single-column functional dependencies within each dataset
    Dependencies {
        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one discovery operation by its tag
    Discover {
        /// Operation: find_unique_keys, find_foreign_keys, or find_dependencies
        #[arg(value_name = "OPERATION")]
        operation: Operation,

        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load files and list dataset metadata
    Datasets {
        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP API server
    Serve {
        #[command(flatten)]
        load: LoadArgs,

        /// Port for web server
        #[arg(short, long, env = "PORT", default_value = "8080")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

/// Dataset files and ingestion options shared by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct LoadArgs {
    /// CSV/TSV files; each becomes a dataset named after its file stem
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Field delimiter (auto-detected when omitted)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Pad short records with missing cells and truncate long ones
    #[arg(long)]
    pub flexible: bool,
}

impl LoadArgs {
    /// Build the profiler configuration these options describe.
    pub fn profiler_config(&self) -> Result<ProfilerConfig, String> {
        let delimiter = match self.delimiter {
            Some(c) if c.is_ascii() => Some(c as u8),
            Some(c) => return Err(format!("Delimiter must be a single ASCII character, got '{}'", c)),
            None => None,
        };

        Ok(ProfilerConfig {
            parser: ParserConfig {
                delimiter,
                flexible: self.flexible,
                ..ParserConfig::default()
            },
        })
    }
}
