//! DTR CLI - Run report viewer.
//!
//! Provides commands for:
//! - `render`: Render a report body from a file or stdin to HTML
//! - `report`: Fetch a run's report from the report API and render it

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ReportArgs};
use output::Output;

/// DTR - Run report viewer.
#[derive(Parser)]
#[command(name = "dtr", version, about)]
struct Cli {
    /// Enable verbose output (request and fallback logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report body to HTML.
    Render(RenderArgs),
    /// Fetch a run's report and render it to HTML.
    Report(ReportArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Report(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
