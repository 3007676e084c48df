//! The color-sort puzzle: pour colored blocks between tubes until every
//! tube is uniform.

mod game;
mod rules;
mod types;

pub use game::{SortGame, SortStatus};
pub use rules::{check_pour, is_solved, Pour, PourError};
pub use types::{Color, Tube, MAX_COLORS, TUBE_CAPACITY};
