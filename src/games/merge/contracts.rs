//! Contract-based validation for the tile-merge puzzle.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, MergeInvariants};
use super::types::GameState;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game must be in a phase that accepts moves.
pub struct GameActive;

impl GameActive {
    /// Validates that the phase accepts directional intents.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.phase().accepts_moves() {
            Ok(())
        } else {
            Err(MoveError::GameNotActive(state.phase()))
        }
    }
}

/// Contract for directional moves.
///
/// Preconditions:
/// - Phase accepts moves
///
/// Postconditions:
/// - All game invariants hold
/// - Score did not decrease
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, _action: &Move) -> Result<(), MoveError> {
        GameActive::check(state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.score() < before.score() {
            return Err(MoveError::InvariantViolation(format!(
                "Score regressed from {} to {}",
                before.score(),
                after.score()
            )));
        }

        MergeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::merge::action::Direction;
    use crate::games::merge::rules::seed_grid;
    use crate::games::merge::types::Phase;
    use rand::{rngs::StdRng, SeedableRng};

    fn playing_state() -> GameState {
        let mut rng = StdRng::seed_from_u64(5);
        GameState::started(seed_grid(&mut rng))
    }

    #[test]
    fn test_precondition_playing_phase() {
        let state = playing_state();
        let action = Move::new(Direction::Left);
        assert!(MoveContract::pre(&state, &action).is_ok());
    }

    #[test]
    fn test_precondition_rejects_idle() {
        let state = GameState::new();
        let action = Move::new(Direction::Left);
        assert!(matches!(
            MoveContract::pre(&state, &action),
            Err(MoveError::GameNotActive(Phase::Idle))
        ));
    }

    #[test]
    fn test_postcondition_holds_for_gain() {
        let before = playing_state();
        let mut after = before.clone();
        after.add_score(4);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_score_regression() {
        let mut before = playing_state();
        before.add_score(8);
        let after = playing_state();
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        use crate::games::merge::types::{Cell, Grid};
        let before = playing_state();
        let mut after = before.clone();
        let mut grid = Grid::new();
        grid.set(0, 0, Cell::Tile(3));
        after.set_grid(grid);
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
