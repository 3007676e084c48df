//! Core domain types for the tile-merge puzzle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 4;

/// Tile value that flips the game into the won phase.
pub const TARGET_TILE: u32 = 2048;

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a tile with a power-of-two value.
    Tile(u32),
}

impl Cell {
    /// Returns the tile value, or 0 for an empty cell.
    pub fn value(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::Tile(value) => value,
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 4x4 grid of cells, row-major.
///
/// The grid is a plain value: the move engine never mutates its input, it
/// computes a replacement grid that the game state swaps in wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [Cell; GRID_SIZE * GRID_SIZE],
}

impl Grid {
    /// Creates a new all-empty grid.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE * GRID_SIZE],
        }
    }

    /// Builds a grid from raw row-major values, 0 meaning empty.
    pub fn from_values(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    grid.set(row, col, Cell::Tile(value));
                }
            }
        }
        grid
    }

    /// Returns raw row-major values, 0 meaning empty.
    pub fn to_values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                rows[row][col] = self.get(row, col).value();
            }
        }
        rows
    }

    /// Gets the cell at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * GRID_SIZE + col]
    }

    /// Sets the cell at the given row and column.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * GRID_SIZE + col] = cell;
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; GRID_SIZE * GRID_SIZE] {
        &self.cells
    }

    /// Extracts one row as a lane.
    pub fn row(&self, row: usize) -> [Cell; GRID_SIZE] {
        std::array::from_fn(|col| self.get(row, col))
    }

    /// Extracts one column as a lane.
    pub fn column(&self, col: usize) -> [Cell; GRID_SIZE] {
        std::array::from_fn(|row| self.get(row, col))
    }

    /// Writes a lane back as a row.
    pub fn set_row(&mut self, row: usize, lane: [Cell; GRID_SIZE]) {
        for (col, cell) in lane.into_iter().enumerate() {
            self.set(row, col, cell);
        }
    }

    /// Writes a lane back as a column.
    pub fn set_column(&mut self, col: usize, lane: [Cell; GRID_SIZE]) {
        for (row, cell) in lane.into_iter().enumerate() {
            self.set(row, col, cell);
        }
    }

    /// Coordinates of all empty cells, row-major.
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.get(row, col).is_empty() {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Checks if any cell is empty.
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Checks if any cell holds the given tile value.
    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().any(|cell| cell.value() == value)
    }

    /// Sum of all tile values on the grid.
    pub fn total_value(&self) -> u64 {
        self.cells.iter().map(|cell| u64::from(cell.value())).sum()
    }

    /// Highest tile value on the grid, 0 when empty.
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().map(|cell| cell.value()).max().unwrap_or(0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                match self.get(row, col) {
                    Cell::Empty => write!(f, "{:>6}", ".")?,
                    Cell::Tile(value) => write!(f, "{value:>6}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Current phase of the game.
///
/// Transitions are enforced by the engine: `Playing` moves to `Won` or
/// `Exhausted` only through terminal classification, `Won` returns to
/// `Playing` through an explicit continue, and any phase returns to
/// `Playing` through an explicit new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game started yet.
    Idle,
    /// Game is accepting moves.
    Playing,
    /// The target tile has been reached; play may continue.
    Won,
    /// No empty cell and no adjacent equal pair remains.
    Exhausted,
}

impl Phase {
    /// Checks whether directional intents are accepted in this phase.
    pub fn accepts_moves(self) -> bool {
        matches!(self, Phase::Playing)
    }
}

/// Complete game state: grid, cumulative score, phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The grid.
    grid: Grid,
    /// Cumulative score, non-decreasing while playing.
    score: u32,
    /// Game phase.
    phase: Phase,
}

impl GameState {
    /// Creates an idle state with an empty grid.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            score: 0,
            phase: Phase::Idle,
        }
    }

    /// Creates a playing state from a freshly seeded grid.
    pub(super) fn started(grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            phase: Phase::Playing,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Replaces the grid after an accepted move.
    pub(super) fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Banks the score gained by an accepted move.
    pub(super) fn add_score(&mut self, gained: u32) {
        self.score += gained;
    }

    /// Sets the phase.
    pub(super) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
