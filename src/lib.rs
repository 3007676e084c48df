//! Mindful Games library - type-safe puzzle engines
//!
//! Game logic for a small personal-wellness app: a 2048-style tile-merge
//! puzzle and a color-sort tube puzzle. The engines are thin, synchronous
//! state machines; rendering, input devices, and networking live outside.
//!
//! # Architecture
//!
//! - **Games**: pure rules plus a phase-enforcing engine per puzzle
//! - **Session**: game lifecycle bound to a persistence collaborator
//! - **Store**: load-at-start, save-on-change high-score storage
//!
//! # Example
//!
//! ```
//! use mindful_games::{Direction, MemoryScoreStore, MergeSession, Phase};
//!
//! # fn example() -> Result<(), mindful_games::StoreError> {
//! let mut session = MergeSession::open(MemoryScoreStore::new())?;
//! let opening = session.new_game();
//! assert_eq!(*opening.phase(), Phase::Playing);
//!
//! // Rejected intents (like a slide that moves nothing) are ignored.
//! let _ = session.dispatch(Direction::Left);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod session;
mod store;

// Crate-level exports - Session management
pub use session::{MergeSession, Snapshot};

// Crate-level exports - Persistence
pub use store::{GameKey, JsonScoreStore, MemoryScoreStore, ScoreStore, StoreError};

// Crate-level exports - Shared puzzle surface
pub use games::Puzzle;

// Crate-level exports - Tile-merge puzzle
pub use games::merge::{
    apply, classify, is_exhausted, seed_grid, slide_lane, spawn, Cell, Classification, Direction,
    Game, GameState, Grid, Lane, Move, MoveError, MoveOutcome, Phase, GRID_SIZE, TARGET_TILE,
};

// Crate-level exports - Color-sort puzzle
pub use games::colorsort::{
    check_pour, is_solved, Color, Pour, PourError, SortGame, SortStatus, Tube, MAX_COLORS,
    TUBE_CAPACITY,
};
