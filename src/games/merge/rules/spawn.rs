//! Random tile spawning.

use super::super::types::{Cell, Grid};
use rand::Rng;
use tracing::instrument;

/// Inserts a 2 (90%) or 4 (10%) into a uniformly random empty cell.
///
/// A grid with no empty cell is returned unchanged; terminal
/// classification is expected to have caught that case already, but the
/// spawner tolerates it.
#[instrument(skip(grid, rng))]
pub fn spawn<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    let empties = grid.empty_positions();
    if empties.is_empty() {
        return *grid;
    }

    let (row, col) = empties[rng.gen_range(0..empties.len())];
    let mut next = *grid;
    next.set(row, col, Cell::Tile(random_tile(rng)));
    next
}

/// Seeds the opening position: two spawns on an all-empty grid.
#[instrument(skip(rng))]
pub fn seed_grid<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let grid = spawn(&Grid::new(), rng);
    spawn(&grid, rng)
}

fn random_tile<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..10) < 9 { 2 } else { 4 }
}
