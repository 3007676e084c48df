//! Session lifecycle for the tile-merge game.
//!
//! Wires the engine to the persistence collaborator: the high score is
//! loaded once when the session opens and written back whenever the
//! current score exceeds it. The view gets a snapshot after every
//! accepted move, sufficient for a stateless re-render.

use crate::games::merge::{Direction, Game, Grid, Move, MoveError, Phase, GRID_SIZE};
use crate::store::{GameKey, ScoreStore, StoreError};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Everything the view needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Snapshot {
    /// Raw cell values, row-major, 0 meaning empty.
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
    /// Cumulative score of the running game.
    score: u32,
    /// Best score seen across sessions, including this one.
    high_score: u32,
    /// Current phase.
    phase: Phase,
}

impl Snapshot {
    fn of(grid: &Grid, score: u32, high_score: u32, phase: Phase) -> Self {
        Self {
            cells: grid.to_values(),
            score,
            high_score,
            phase,
        }
    }
}

/// A tile-merge play session bound to a score store.
#[derive(Debug)]
pub struct MergeSession<S: ScoreStore> {
    game: Game,
    store: S,
    high_score: u32,
    rng: StdRng,
}

impl<S: ScoreStore> MergeSession<S> {
    /// Opens a session, reading the stored high score once.
    #[instrument(skip(store))]
    pub fn open(store: S) -> Result<Self, StoreError> {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Opens a session with a caller-provided RNG, for deterministic play.
    #[instrument(skip(store, rng))]
    pub fn with_rng(store: S, rng: StdRng) -> Result<Self, StoreError> {
        let high_score = store.load_high_score(GameKey::TileMerge)?.unwrap_or(0);
        info!(high_score, "Opened tile-merge session");
        Ok(Self {
            game: Game::new(),
            store,
            high_score,
            rng,
        })
    }

    /// Starts a fresh game and returns the opening snapshot.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Snapshot {
        self.game.new_game(&mut self.rng);
        self.snapshot()
    }

    /// Dispatches a directional intent from the input adapter.
    ///
    /// Intents arriving outside the playing phase, and slides that change
    /// nothing, are rejected without any state change.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, direction: Direction) -> Result<Snapshot, MoveError> {
        let gained = match self.game.apply_move(Move::new(direction), &mut self.rng) {
            Ok(gained) => gained,
            Err(err) => {
                debug!(%err, "Ignoring directional intent");
                return Err(err);
            }
        };

        if gained > 0 {
            self.record_score();
        }
        Ok(self.snapshot())
    }

    /// Resumes play after the win has been acknowledged.
    #[instrument(skip(self))]
    pub fn continue_playing(&mut self) -> Snapshot {
        self.game.continue_playing();
        self.snapshot()
    }

    /// Current snapshot for a stateless re-render.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.game.state();
        Snapshot::of(state.grid(), state.score(), self.high_score, state.phase())
    }

    /// Best score seen so far, stored or live.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Writes the high score through when the live score passes it.
    ///
    /// A failed write is logged and play continues; losing a high score
    /// must not lose the game.
    fn record_score(&mut self) {
        let score = self.game.state().score();
        if score <= self.high_score {
            return;
        }

        self.high_score = score;
        if let Err(err) = self.store.save_high_score(GameKey::TileMerge, score) {
            warn!(%err, score, "Failed to persist high score");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryScoreStore;

    fn session() -> MergeSession<MemoryScoreStore> {
        MergeSession::with_rng(MemoryScoreStore::new(), StdRng::seed_from_u64(17)).unwrap()
    }

    #[test]
    fn test_open_reads_stored_high_score() {
        let mut store = MemoryScoreStore::new();
        store.save_high_score(GameKey::TileMerge, 256).unwrap();
        let session = MergeSession::with_rng(store, StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(session.high_score(), 256);
    }

    #[test]
    fn test_new_game_snapshot() {
        let mut session = session();
        let snapshot = session.new_game();
        assert_eq!(*snapshot.phase(), Phase::Playing);
        assert_eq!(*snapshot.score(), 0);

        let tiles: Vec<u32> = snapshot
            .cells()
            .iter()
            .flatten()
            .copied()
            .filter(|&v| v != 0)
            .collect();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|&v| v == 2 || v == 4));
    }

    #[test]
    fn test_dispatch_before_start_is_ignored() {
        let mut session = session();
        let result = session.dispatch(Direction::Up);
        assert!(matches!(result, Err(MoveError::GameNotActive(Phase::Idle))));
        assert_eq!(*session.snapshot().phase(), Phase::Idle);
    }
}
