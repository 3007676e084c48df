//! The move engine: directional slide-and-merge over grid lanes.
//!
//! Pure functions only. The grid decomposes into four independent lanes,
//! rows for horizontal moves and columns for vertical ones. Lanes for
//! Right/Down are reversed first so every slide runs toward index 0.

use super::super::action::Direction;
use super::super::types::{Cell, Grid, GRID_SIZE};
use tracing::instrument;

/// One row or column of the grid.
pub type Lane = [Cell; GRID_SIZE];

/// Result of applying a directional move to a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The replacement grid.
    pub grid: Grid,
    /// Score gained by merges in this move.
    pub score_gained: u32,
    /// True iff any cell differs from the input grid.
    pub changed: bool,
}

/// Slides one lane toward index 0, merging adjacent equal pairs.
///
/// Empties are removed, then the compacted values are scanned left to
/// right: an equal adjacent pair emits one doubled tile and the scan
/// resumes past both, so a just-merged tile never merges again in the
/// same move. `[2,2,2,2]` therefore becomes `[4,4,_,_]`, not `[8,_,_,_]`.
pub fn slide_lane(lane: &Lane) -> (Lane, u32) {
    let compacted: Vec<u32> = lane.iter().filter(|c| !c.is_empty()).map(|c| c.value()).collect();

    let mut out = [Cell::Empty; GRID_SIZE];
    let mut gained = 0;
    let mut write = 0;
    let mut read = 0;
    while read < compacted.len() {
        if read + 1 < compacted.len() && compacted[read] == compacted[read + 1] {
            let merged = compacted[read] * 2;
            out[write] = Cell::Tile(merged);
            gained += merged;
            read += 2;
        } else {
            out[write] = Cell::Tile(compacted[read]);
            read += 1;
        }
        write += 1;
    }

    (out, gained)
}

/// Applies one directional move to the whole grid.
///
/// Deterministic given grid and direction; the input grid is untouched.
/// `changed` is false exactly when no lane moved, in which case the
/// caller must reject the move: no spawn, no phase re-check, no score.
#[instrument(skip(grid))]
pub fn apply(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut next = *grid;
    let mut score_gained = 0;
    let mut changed = false;

    for lane_idx in 0..GRID_SIZE {
        let lane = if direction.is_horizontal() {
            grid.row(lane_idx)
        } else {
            grid.column(lane_idx)
        };

        let oriented = if direction.slides_toward_end() {
            reversed(lane)
        } else {
            lane
        };
        let (slid, gained) = slide_lane(&oriented);
        let restored = if direction.slides_toward_end() {
            reversed(slid)
        } else {
            slid
        };

        if restored != lane {
            changed = true;
        }
        score_gained += gained;

        if direction.is_horizontal() {
            next.set_row(lane_idx, restored);
        } else {
            next.set_column(lane_idx, restored);
        }
    }

    MoveOutcome {
        grid: next,
        score_gained,
        changed,
    }
}

fn reversed(mut lane: Lane) -> Lane {
    lane.reverse();
    lane
}
