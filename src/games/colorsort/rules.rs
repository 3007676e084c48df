//! Pour legality and terminal detection for the color-sort puzzle.

use super::types::Tube;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A pour: move the top run of blocks from one tube to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pour {
    /// Index of the source tube.
    pub from: usize,
    /// Index of the target tube.
    pub to: usize,
}

impl Pour {
    /// Creates a new pour.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Error that can occur when validating a pour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PourError {
    /// Source and target are the same tube.
    #[display("Cannot pour a tube into itself")]
    SameTube,

    /// A tube index is out of range.
    #[display("Tube index {} is out of range", _0)]
    OutOfRange(usize),

    /// The source tube has no blocks.
    #[display("Source tube {} is empty", _0)]
    SourceEmpty(usize),

    /// The target tube is at capacity.
    #[display("Target tube {} is full", _0)]
    TargetFull(usize),

    /// The target's top color does not match the source's top color.
    #[display("Top colors of tubes {} and {} do not match", _0, _1)]
    ColorMismatch(usize, usize),

    /// The puzzle is already solved.
    #[display("Puzzle is already solved")]
    AlreadySolved,
}

impl std::error::Error for PourError {}

/// Validates a pour, returning how many blocks it would move.
///
/// A pour is legal iff the source is non-empty, the target is not full,
/// and the target is empty or its top color matches the source's top
/// color. A legal pour moves the source's maximal top run, capped by the
/// free space in the target.
#[instrument(skip(tubes))]
pub fn check_pour(tubes: &[Tube], pour: Pour) -> Result<usize, PourError> {
    if pour.from == pour.to {
        return Err(PourError::SameTube);
    }
    let source = tubes.get(pour.from).ok_or(PourError::OutOfRange(pour.from))?;
    let target = tubes.get(pour.to).ok_or(PourError::OutOfRange(pour.to))?;

    let top = source.top().ok_or(PourError::SourceEmpty(pour.from))?;
    if target.is_full() {
        return Err(PourError::TargetFull(pour.to));
    }
    if let Some(target_top) = target.top() {
        if target_top != top {
            return Err(PourError::ColorMismatch(pour.from, pour.to));
        }
    }

    Ok(source.top_run().min(target.space()))
}

/// Checks the solved condition: every non-empty tube is full and
/// uniformly one color.
pub fn is_solved(tubes: &[Tube]) -> bool {
    tubes
        .iter()
        .all(|tube| tube.is_empty() || tube.is_uniform_full())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::colorsort::types::Color;

    fn tubes() -> Vec<Tube> {
        vec![
            Tube::with_blocks(vec![Color::Red, Color::Blue, Color::Blue]),
            Tube::with_blocks(vec![Color::Green, Color::Blue]),
            Tube::new(),
            Tube::with_blocks(vec![Color::Red; 4]),
        ]
    }

    #[test]
    fn test_matching_tops_are_legal() {
        assert_eq!(check_pour(&tubes(), Pour::new(0, 1)), Ok(2));
    }

    #[test]
    fn test_empty_target_accepts_any_color() {
        assert_eq!(check_pour(&tubes(), Pour::new(0, 2)), Ok(2));
    }

    #[test]
    fn test_run_capped_by_target_space() {
        let racked = vec![
            Tube::with_blocks(vec![Color::Blue, Color::Blue, Color::Blue]),
            Tube::with_blocks(vec![Color::Red, Color::Red, Color::Blue]),
        ];
        // Three blues in the run, but only one free slot.
        assert_eq!(check_pour(&racked, Pour::new(0, 1)), Ok(1));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(check_pour(&tubes(), Pour::new(1, 1)), Err(PourError::SameTube));
        assert_eq!(
            check_pour(&tubes(), Pour::new(2, 0)),
            Err(PourError::SourceEmpty(2))
        );
        assert_eq!(
            check_pour(&tubes(), Pour::new(0, 3)),
            Err(PourError::TargetFull(3))
        );
        assert_eq!(
            check_pour(&tubes(), Pour::new(3, 1)),
            Err(PourError::ColorMismatch(3, 1))
        );
        assert_eq!(
            check_pour(&tubes(), Pour::new(0, 9)),
            Err(PourError::OutOfRange(9))
        );
    }

    #[test]
    fn test_solved_ignores_empty_tubes() {
        let solved = vec![
            Tube::with_blocks(vec![Color::Red; 4]),
            Tube::with_blocks(vec![Color::Blue; 4]),
            Tube::new(),
        ];
        assert!(is_solved(&solved));
        assert!(!is_solved(&tubes()));
    }

    #[test]
    fn test_partial_uniform_tube_is_not_solved() {
        let rack = vec![Tube::with_blocks(vec![Color::Red; 3]), Tube::new()];
        assert!(!is_solved(&rack));
    }
}
