//! Serve command - expose the profiler over HTTP.

use colored::Colorize;

use crate::cli::LoadArgs;
use crate::server::{app, state::AppState};

pub fn run(load: LoadArgs, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let profiler = super::load_profiler(&load)?;
    let preloaded = profiler.registry().len();
    let state = AppState::new(profiler);

    let url = format!("http://{}:{}", host, port);
    println!();
    println!(
        "{} {}",
        "DPQL backend running on".cyan().bold(),
        url.white().bold()
    );
    if preloaded > 0 {
        println!("  Preloaded datasets: {}", preloaded);
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, &host, port))?;

    Ok(())
}
