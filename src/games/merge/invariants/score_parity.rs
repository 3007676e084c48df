//! Score invariant: the score is always a multiple of four.

use super::super::types::GameState;
use super::Invariant;

/// Invariant: the score is a multiple of four.
///
/// Every merge banks 2v where v is a tile value >= 2, so each
/// contribution, and therefore the running total, is divisible by four.
pub struct ScoreParityInvariant;

impl Invariant<GameState> for ScoreParityInvariant {
    fn holds(state: &GameState) -> bool {
        state.score() % 4 == 0
    }

    fn description() -> &'static str {
        "Score is a multiple of four"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::merge::types::GameState;

    #[test]
    fn test_zero_score_holds() {
        assert!(ScoreParityInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_merge_gains_hold() {
        let mut state = GameState::new();
        state.add_score(4);
        state.add_score(8);
        state.add_score(64);
        assert!(ScoreParityInvariant::holds(&state));
    }

    #[test]
    fn test_odd_score_violates() {
        let mut state = GameState::new();
        state.add_score(6);
        assert!(!ScoreParityInvariant::holds(&state));
    }
}
