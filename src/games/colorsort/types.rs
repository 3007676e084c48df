//! Core domain types for the color-sort puzzle.

use serde::{Deserialize, Serialize};

/// Blocks a tube can hold.
pub const TUBE_CAPACITY: usize = 4;

/// Number of distinct block colors available to level generation.
pub const MAX_COLORS: usize = 8;

/// A block color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Color {
    /// Red block.
    Red,
    /// Orange block.
    Orange,
    /// Yellow block.
    Yellow,
    /// Green block.
    Green,
    /// Blue block.
    Blue,
    /// Purple block.
    Purple,
    /// Pink block.
    Pink,
    /// Teal block.
    Teal,
}

/// A tube: a bounded stack of colored blocks, bottom first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tube {
    blocks: Vec<Color>,
}

impl Tube {
    /// Creates an empty tube.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Creates a tube pre-filled with the given blocks, bottom first.
    pub fn with_blocks(blocks: Vec<Color>) -> Self {
        debug_assert!(blocks.len() <= TUBE_CAPACITY);
        Self { blocks }
    }

    /// Returns the blocks, bottom first.
    pub fn blocks(&self) -> &[Color] {
        &self.blocks
    }

    /// Number of blocks in the tube.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Checks if the tube has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Checks if the tube is at capacity.
    pub fn is_full(&self) -> bool {
        self.blocks.len() == TUBE_CAPACITY
    }

    /// Free slots remaining.
    pub fn space(&self) -> usize {
        TUBE_CAPACITY - self.blocks.len()
    }

    /// The top block, if any.
    pub fn top(&self) -> Option<Color> {
        self.blocks.last().copied()
    }

    /// Length of the maximal contiguous run of the top color.
    pub fn top_run(&self) -> usize {
        match self.top() {
            None => 0,
            Some(color) => self
                .blocks
                .iter()
                .rev()
                .take_while(|&&block| block == color)
                .count(),
        }
    }

    /// Checks if the tube is full and uniformly one color.
    pub fn is_uniform_full(&self) -> bool {
        self.is_full() && self.blocks.iter().all(|&block| Some(block) == self.top())
    }

    pub(super) fn push(&mut self, color: Color) {
        debug_assert!(!self.is_full());
        self.blocks.push(color);
    }

    pub(super) fn pop(&mut self) -> Option<Color> {
        self.blocks.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_run_counts_contiguous_only() {
        let tube = Tube::with_blocks(vec![Color::Red, Color::Blue, Color::Blue]);
        assert_eq!(tube.top(), Some(Color::Blue));
        assert_eq!(tube.top_run(), 2);
    }

    #[test]
    fn test_empty_tube_has_no_run() {
        assert_eq!(Tube::new().top_run(), 0);
        assert_eq!(Tube::new().top(), None);
    }

    #[test]
    fn test_uniform_full_requires_both() {
        let short = Tube::with_blocks(vec![Color::Red; 3]);
        assert!(!short.is_uniform_full());

        let mixed = Tube::with_blocks(vec![Color::Red, Color::Red, Color::Red, Color::Blue]);
        assert!(!mixed.is_uniform_full());

        let solved = Tube::with_blocks(vec![Color::Red; TUBE_CAPACITY]);
        assert!(solved.is_uniform_full());
    }
}
