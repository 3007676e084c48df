//! Phase invariant: the phase agrees with what the grid can support.

use super::super::rules::terminal;
use super::super::types::{GameState, Phase, TARGET_TILE};
use super::Invariant;

/// Invariant: the phase is consistent with the grid.
///
/// - Idle: empty grid, zero score.
/// - Playing: at least one legal move remains.
/// - Won: the target tile is on the grid.
/// - Exhausted: no empty cell and no adjacent equal pair.
pub struct PhaseConsistentInvariant;

impl Invariant<GameState> for PhaseConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        match state.phase() {
            Phase::Idle => state.grid().cells().iter().all(|c| c.is_empty()) && state.score() == 0,
            Phase::Playing => !terminal::is_exhausted(state.grid()),
            Phase::Won => state.grid().contains(TARGET_TILE),
            Phase::Exhausted => terminal::is_exhausted(state.grid()),
        }
    }

    fn description() -> &'static str {
        "Phase is consistent with the grid contents"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::merge::types::{Cell, Grid};

    #[test]
    fn test_idle_state_holds() {
        assert!(PhaseConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_playing_with_moves_left_holds() {
        let grid = Grid::from_values([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(PhaseConsistentInvariant::holds(&GameState::started(grid)));
    }

    #[test]
    fn test_playing_on_dead_grid_violates() {
        let dead = Grid::from_values([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(!PhaseConsistentInvariant::holds(&GameState::started(dead)));
    }

    #[test]
    fn test_idle_with_tile_violates() {
        let mut state = GameState::new();
        let mut grid = Grid::new();
        grid.set(0, 0, Cell::Tile(2));
        state.set_grid(grid);
        assert!(!PhaseConsistentInvariant::holds(&state));
    }
}
