//! Game engine for the color-sort puzzle.

use super::rules::{self, Pour, PourError};
use super::types::{Color, Tube, MAX_COLORS, TUBE_CAPACITY};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Terminal classification of a color-sort rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortStatus {
    /// Blocks remain out of order.
    Sorting,
    /// Every non-empty tube is full and uniformly one color.
    Solved,
}

/// Color-sort game engine: a rack of tubes plus pour accounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortGame {
    level: u32,
    tubes: Vec<Tube>,
    pours: u32,
    solved: bool,
}

impl SortGame {
    /// Generates a level: the color count grows every three levels up to
    /// the palette size, each color contributes one tube's worth of
    /// blocks, the blocks are shuffled uniformly, and two empty working
    /// tubes are appended.
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Self {
        let level = level.max(1);
        let num_colors = (3 + (level as usize - 1) / 3).min(MAX_COLORS);

        let mut blocks: Vec<Color> = Color::iter()
            .take(num_colors)
            .flat_map(|color| std::iter::repeat(color).take(TUBE_CAPACITY))
            .collect();
        blocks.shuffle(rng);

        let mut tubes: Vec<Tube> = blocks
            .chunks(TUBE_CAPACITY)
            .map(|chunk| Tube::with_blocks(chunk.to_vec()))
            .collect();
        tubes.push(Tube::new());
        tubes.push(Tube::new());

        info!(level, num_colors, tubes = tubes.len(), "Generated level");
        Self {
            level,
            tubes,
            pours: 0,
            solved: false,
        }
    }

    /// Returns the rack of tubes.
    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    /// Returns the level number.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Number of accepted pours so far.
    pub fn pours(&self) -> u32 {
        self.pours
    }

    /// Checks if the rack is solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Applies a pour, returning how many blocks moved.
    ///
    /// Illegal pours are rejected without touching the rack.
    #[instrument(skip(self))]
    pub fn pour(&mut self, pour: Pour) -> Result<usize, PourError> {
        if self.solved {
            return Err(PourError::AlreadySolved);
        }

        let count = rules::check_pour(&self.tubes, pour)?;
        for _ in 0..count {
            let block = self.tubes[pour.from].pop().expect("checked source run");
            self.tubes[pour.to].push(block);
        }
        self.pours += 1;
        self.solved = rules::is_solved(&self.tubes);

        debug!(moved = count, pours = self.pours, solved = self.solved, "Pour accepted");
        Ok(count)
    }
}

impl super::super::Puzzle for SortGame {
    type Action = Pour;
    type Verdict = SortStatus;

    fn is_legal(&self, action: &Pour) -> bool {
        !self.solved && rules::check_pour(&self.tubes, *action).is_ok()
    }

    fn classify(&self) -> SortStatus {
        if rules::is_solved(&self.tubes) {
            SortStatus::Solved
        } else {
            SortStatus::Sorting
        }
    }
}
