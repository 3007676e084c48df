//! Command-line interface for mindful_games.

use clap::{Parser, Subcommand};

/// Mindful Games - puzzle engines for a wellness mini-game bundle
#[derive(Parser, Debug)]
#[command(name = "mindful_games")]
#[command(about = "Type-safe puzzle engines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play random-policy tile-merge games and report the outcomes
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}
