//! Ultimate Tic-Tac-Toe CLI - play against the engine's agents or pit
//! them against each other.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "uttt")]
#[command(version, about = "Ultimate Tic-Tac-Toe engine and agents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game interactively (optionally against an agent)
    Play(ultimate_ttt::cli::commands::play::PlayArgs),

    /// Compare two agents head-to-head
    Compare(ultimate_ttt::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => ultimate_ttt::cli::commands::play::execute(args),
        Commands::Compare(args) => ultimate_ttt::cli::commands::compare::execute(args),
    }
}
