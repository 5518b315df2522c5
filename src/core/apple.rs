//! Apple placement - uniform over free cells
//!
//! Rejection sampling over the full grid: draw a random cell, accept iff
//! the snake does not cover it. Expected draws = grid area / free cells,
//! so a cap plus a deterministic fallback keeps placement total even on a
//! nearly full grid.

use crate::core::grid::OccupancyGrid;
use crate::core::rng::GameRng;
use crate::types::{Cell, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// Upper bound on rejection draws before falling back to an index scan.
const MAX_DRAWS: usize = 4 * GRID_CELLS;

/// Pick a uniformly random free cell, or `None` when the grid is full.
pub fn place_apple(grid: &OccupancyGrid, rng: &mut GameRng) -> Option<Cell> {
    let free = grid.free_cells();
    if free == 0 {
        return None;
    }

    for _ in 0..MAX_DRAWS {
        let x = rng.next_range(GRID_WIDTH as u32) as i8;
        let y = rng.next_range(GRID_HEIGHT as u32) as i8;
        let candidate = Cell::new(x, y);
        if !grid.is_occupied(candidate) {
            return Some(candidate);
        }
    }

    // Cap exhausted (astronomically unlikely unless the grid is almost
    // full): pick the k-th free cell directly, still uniform.
    grid.kth_free(rng.next_range(free as u32) as usize)
}
