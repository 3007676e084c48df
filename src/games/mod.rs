//! Game implementations for the wellness bundle.
//!
//! Each puzzle is its own module behind the shared [`Puzzle`] surface;
//! the engines share an interface, not code.

pub mod colorsort;
pub mod merge;

/// Common surface of a puzzle engine: move legality plus terminal
/// classification over the engine's own state and action types.
pub trait Puzzle {
    /// The move type the puzzle accepts.
    type Action;
    /// The terminal classification the puzzle reports.
    type Verdict;

    /// Checks whether an action would be accepted in the current state.
    fn is_legal(&self, action: &Self::Action) -> bool;

    /// Classifies the current state.
    fn classify(&self) -> Self::Verdict;
}
