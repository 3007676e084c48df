//! Terminal classification: won, exhausted, or still going.

use super::super::types::{Grid, GRID_SIZE, TARGET_TILE};
use tracing::instrument;

/// Raw classification of a grid, independent of session latching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Moves remain and the target has not been reached.
    Ongoing,
    /// At least one cell holds the target tile.
    Won,
    /// No empty cell and no adjacent equal pair anywhere.
    Exhausted,
}

/// Classifies a grid. The won check runs first and short-circuits.
#[instrument(skip(grid))]
pub fn classify(grid: &Grid) -> Classification {
    if grid.contains(TARGET_TILE) {
        return Classification::Won;
    }
    if is_exhausted(grid) {
        return Classification::Exhausted;
    }
    Classification::Ongoing
}

/// Checks the exhausted condition: full grid with no mergeable neighbors.
///
/// A single empty cell anywhere, or a single horizontally or vertically
/// adjacent equal pair anywhere, keeps the game alive.
pub fn is_exhausted(grid: &Grid) -> bool {
    !grid.has_empty() && !has_adjacent_pair(grid)
}

fn has_adjacent_pair(grid: &Grid) -> bool {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let value = grid.get(row, col).value();
            if value == 0 {
                continue;
            }
            if col + 1 < GRID_SIZE && grid.get(row, col + 1).value() == value {
                return true;
            }
            if row + 1 < GRID_SIZE && grid.get(row + 1, col).value() == value {
                return true;
            }
        }
    }
    false
}
