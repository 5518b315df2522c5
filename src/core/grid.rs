//! Occupancy grid - tracks which cells the snake currently covers
//!
//! Uses a flat boolean array for O(1) collision checks instead of scanning
//! the body list every tick. Row-major order: (y * WIDTH + x).

use crate::types::{Cell, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// Flat occupancy map over the play grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: [bool; GRID_CELLS],
    occupied: usize,
}

impl OccupancyGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [false; GRID_CELLS],
            occupied: 0,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH || y < 0 || y >= GRID_HEIGHT {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        match Self::index(cell.x, cell.y) {
            Some(idx) => self.cells[idx],
            None => false,
        }
    }

    /// Mark a cell occupied. Returns false if out of bounds.
    pub fn occupy(&mut self, cell: Cell) -> bool {
        match Self::index(cell.x, cell.y) {
            Some(idx) => {
                if !self.cells[idx] {
                    self.cells[idx] = true;
                    self.occupied += 1;
                }
                true
            }
            None => false,
        }
    }

    /// Mark a cell free. Returns false if out of bounds.
    pub fn vacate(&mut self, cell: Cell) -> bool {
        match Self::index(cell.x, cell.y) {
            Some(idx) => {
                if self.cells[idx] {
                    self.cells[idx] = false;
                    self.occupied -= 1;
                }
                true
            }
            None => false,
        }
    }

    /// Number of unoccupied cells on the grid
    pub fn free_cells(&self) -> usize {
        GRID_CELLS - self.occupied
    }

    /// The k-th free cell in row-major order, `k < free_cells()`.
    ///
    /// Used as the deterministic fallback when rejection sampling for apple
    /// placement hits its draw cap.
    pub fn kth_free(&self, k: usize) -> Option<Cell> {
        let mut remaining = k;
        for (idx, &filled) in self.cells.iter().enumerate() {
            if filled {
                continue;
            }
            if remaining == 0 {
                let x = (idx % GRID_WIDTH as usize) as i8;
                let y = (idx / GRID_WIDTH as usize) as i8;
                return Some(Cell::new(x, y));
            }
            remaining -= 1;
        }
        None
    }

    /// Reset every cell to free
    pub fn clear(&mut self) {
        self.cells = [false; GRID_CELLS];
        self.occupied = 0;
    }
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self::new()
    }
}
