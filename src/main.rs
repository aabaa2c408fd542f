use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use outlay_cli::cli::{handle_command, Commands};
use outlay_cli::config::{paths::OutlayPaths, settings::Settings};
use outlay_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "outlay",
    author = "Kaylee Beyene",
    version,
    about = "Command-line personal expense tracker",
    long_about = "outlay is a personal expense tracker for the command line. \
                  Expenses live in a single JSON file; each run performs one \
                  operation: add, update, delete, list, or summary."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = OutlayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths)?;

    handle_command(&storage, &settings, cli.command)?;

    Ok(())
}
