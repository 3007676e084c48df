//! Pure game rules: the move engine, the spawner, and terminal detection.

pub mod slide;
pub mod spawn;
pub mod terminal;

pub use slide::{apply, slide_lane, Lane, MoveOutcome};
pub use spawn::{seed_grid, spawn};
pub use terminal::{classify, is_exhausted, Classification};
