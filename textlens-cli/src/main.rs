//! textlens command-line entry point

use anyhow::Result;
use clap::Parser;
use textlens_cli::commands::Commands;

/// Language-aware text analysis: statistics, keywords, word types,
/// named entities, reading time and readability
#[derive(Debug, Parser)]
#[command(name = "textlens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
