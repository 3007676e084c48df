//! Game engine for the tile-merge puzzle.
//!
//! Owns the board state and enforces the phase transition rules: a move
//! is accepted only while playing, only when it changes the grid, and the
//! terminal detector runs strictly after the move and its spawn.

use super::action::{Direction, Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{self, Classification};
use super::types::{GameState, Phase};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Tile-merge game engine.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    /// Latched on the first target reach; the won transition fires once
    /// per game, even if continued play re-satisfies the condition.
    target_reached: bool,
}

impl Game {
    /// Creates an idle game with an empty grid.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            target_reached: false,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Starts a fresh game: empty grid seeded with two tiles, score zero,
    /// playing phase. Valid from any phase.
    #[instrument(skip(self, rng))]
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state = GameState::started(rules::seed_grid(rng));
        self.target_reached = false;
        info!(grid = %self.state.grid(), "Started new game");
    }

    /// Applies a directional move, returning the score gained.
    ///
    /// Rejected moves (wrong phase, or a slide that changes nothing)
    /// leave the state untouched: no spawn, no phase re-check, no score
    /// change.
    #[instrument(skip(self, rng))]
    pub fn apply_move<R: Rng + ?Sized>(
        &mut self,
        action: Move,
        rng: &mut R,
    ) -> Result<u32, MoveError> {
        MoveContract::pre(&self.state, &action)?;

        let outcome = rules::apply(self.state.grid(), action.direction);
        if !outcome.changed {
            debug!("Move has no effect, rejecting");
            return Err(MoveError::NoEffect(action.direction));
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let spawned = rules::spawn(&outcome.grid, rng);
        self.state.set_grid(spawned);
        self.state.add_score(outcome.score_gained);
        self.update_phase();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &self.state)?;

        debug!(
            gained = outcome.score_gained,
            score = self.state.score(),
            phase = ?self.state.phase(),
            "Move accepted"
        );
        Ok(outcome.score_gained)
    }

    /// Convenience: applies a bare direction.
    pub fn slide<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<u32, MoveError> {
        self.apply_move(Move::new(direction), rng)
    }

    /// Resumes play after the win has been acknowledged.
    ///
    /// Only meaningful in the won phase; anywhere else it is a no-op.
    /// The target latch stays set, so the won transition never repeats.
    #[instrument(skip(self))]
    pub fn continue_playing(&mut self) {
        if self.state.phase() == Phase::Won {
            info!("Continuing play past the target tile");
            self.state.set_phase(Phase::Playing);
        }
    }

    /// Re-classifies the grid after an accepted move and spawn.
    fn update_phase(&mut self) {
        match rules::classify(self.state.grid()) {
            Classification::Won if !self.target_reached => {
                self.target_reached = true;
                info!(score = self.state.score(), "Target tile reached");
                self.state.set_phase(Phase::Won);
            }
            // Target already celebrated; the grid can still run dry.
            Classification::Won => {
                if rules::is_exhausted(self.state.grid()) {
                    info!(score = self.state.score(), "No moves remain");
                    self.state.set_phase(Phase::Exhausted);
                }
            }
            Classification::Exhausted => {
                info!(score = self.state.score(), "No moves remain");
                self.state.set_phase(Phase::Exhausted);
            }
            Classification::Ongoing => {}
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
