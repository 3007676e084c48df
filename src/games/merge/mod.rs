//! The tile-merge puzzle: slide and merge power-of-two tiles toward 2048.

mod action;
mod contracts;
mod game;
mod invariants;
mod rules;
mod types;

pub use action::{Direction, Move, MoveError};
pub use game::Game;
pub use rules::{apply, classify, is_exhausted, seed_grid, slide_lane, spawn, Classification, Lane, MoveOutcome};
pub use types::{Cell, GameState, Grid, Phase, GRID_SIZE, TARGET_TILE};

use super::Puzzle;

impl Puzzle for Game {
    type Action = Move;
    type Verdict = Classification;

    /// A directional intent is legal iff the phase accepts moves and the
    /// slide would change at least one cell.
    fn is_legal(&self, action: &Move) -> bool {
        self.state().phase().accepts_moves()
            && apply(self.state().grid(), action.direction).changed
    }

    fn classify(&self) -> Classification {
        classify(self.state().grid())
    }
}
