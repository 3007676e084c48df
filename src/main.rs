//! Mindful Games - engine CLI
//!
//! Drives the puzzle engines headlessly; the real app front-ends render
//! elsewhere.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use mindful_games::{Direction, MemoryScoreStore, MergeSession, MoveError, Phase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate { games, seed } => simulate(games, seed),
    }
}

/// Plays random-policy tile-merge games to exercise the engine.
fn simulate(games: u32, seed: Option<u64>) -> Result<()> {
    let mut seeder = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let directions: Vec<Direction> = Direction::iter().collect();

    let mut best = 0;
    for round in 0..games {
        let session_rng = StdRng::seed_from_u64(seeder.gen_range(0..u64::MAX));
        let mut session = MergeSession::with_rng(MemoryScoreStore::new(), session_rng)?;
        session.new_game();

        let mut moves = 0u32;
        let mut policy = StdRng::seed_from_u64(seeder.gen_range(0..u64::MAX));
        loop {
            let direction = directions[policy.gen_range(0..directions.len())];
            match session.dispatch(direction) {
                Ok(snapshot) => {
                    moves += 1;
                    match snapshot.phase() {
                        Phase::Won => {
                            info!(round, moves, "Reached the target tile, continuing");
                            session.continue_playing();
                        }
                        Phase::Exhausted => break,
                        _ => {}
                    }
                }
                Err(MoveError::NoEffect(_)) => debug!(round, ?direction, "No-op slide"),
                Err(err) => anyhow::bail!("simulation halted: {err}"),
            }
        }

        let snapshot = session.snapshot();
        best = best.max(*snapshot.score());
        info!(
            round,
            moves,
            score = snapshot.score(),
            highest_tile = snapshot.cells().iter().flatten().max().unwrap_or(&0),
            "Game over"
        );
    }

    println!("Played {games} games, best score {best}");
    Ok(())
}
