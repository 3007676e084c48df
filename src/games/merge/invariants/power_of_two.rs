//! Tile-value invariant: every tile is a power of two.

use super::super::types::GameState;
use super::Invariant;

/// Invariant: every non-empty cell holds a power of two >= 2.
///
/// Spawns insert 2 or 4 and merges double an existing value, so nothing
/// else can ever appear on the grid.
pub struct PowerOfTwoInvariant;

impl Invariant<GameState> for PowerOfTwoInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .grid()
            .cells()
            .iter()
            .all(|cell| cell.is_empty() || (cell.value() >= 2 && cell.value().is_power_of_two()))
    }

    fn description() -> &'static str {
        "Every tile value is a power of two >= 2"
    }
}
