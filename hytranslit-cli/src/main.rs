//! Command-line entry point for hytranslit

use anyhow::Result;
use clap::Parser;
use hytranslit_cli::commands::Commands;

/// Transliterate Armenian text into Latin or Cyrillic
#[derive(Debug, Parser)]
#[command(name = "hytranslit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
