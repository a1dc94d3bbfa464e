// File: crates/csv-chart-cli/src/main.rs
// Summary: Entry point; logging init (RUST_LOG), argument parsing and command dispatch.

mod args;
mod commands;
mod progress;

use anyhow::Result;
use clap::Parser;

use crate::args::{Cli, Commands};

fn main() -> Result<()> {
    // RUST_LOG=debug for per-chart details
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Palettes => commands::palettes(),
        Commands::Preview { files, style } => commands::preview(&files, &style.to_options()),
        Commands::Render { files, output, style } => commands::render(&files, output.as_deref(), &style.to_options()),
        Commands::Export { files, output_dir, pause_ms, style } => {
            commands::export(&files, output_dir, pause_ms, &style.to_options())
        }
    }
}
