//! First-class action types for the tile-merge puzzle.
//!
//! Directional intents are domain events, not side effects. Whatever the
//! input device, the adapter reduces it to one of four directions before
//! it reaches the engine.

use super::types::Phase;
use serde::{Deserialize, Serialize};

/// A slide direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Slide tiles toward the top edge.
    Up,
    /// Slide tiles toward the bottom edge.
    Down,
    /// Slide tiles toward the left edge.
    Left,
    /// Slide tiles toward the right edge.
    Right,
}

impl Direction {
    /// Checks whether lanes for this direction are rows (as opposed to columns).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Checks whether the lane must be reversed so the slide runs toward index 0.
    pub fn slides_toward_end(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// A move: the player's directional intent for one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The direction to slide.
    pub direction: Direction,
}

impl Move {
    /// Creates a new move.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slide {:?}", self.direction)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is not accepting moves in its current phase.
    #[display("No moves accepted while {:?}", _0)]
    GameNotActive(Phase),

    /// Sliding in this direction would leave every cell unchanged.
    #[display("Sliding {:?} would not change the grid", _0)]
    NoEffect(Direction),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
