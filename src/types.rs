//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions (cells)
pub const GRID_WIDTH: i8 = 20;
pub const GRID_HEIGHT: i8 = 20;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Fixed tick interval (milliseconds). Lower = faster snake.
pub const TICK_MS: u32 = 100;

/// Minimum drag displacement before a press/release pair counts as a swipe.
///
/// The value matches the 20px threshold of typical touch input. Terminal
/// runners should configure a coarser value since one terminal cell spans
/// many pixels.
pub const DEFAULT_SWIPE_MIN: i32 = 20;

/// A single grid cell, `(x, y)` with `0 <= x < GRID_WIDTH` and
/// `0 <= y < GRID_HEIGHT`. Top-left origin, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The cell one step away in `heading`, with toroidal wrap on both axes.
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: wrap(self.x + dx, GRID_WIDTH),
            y: wrap(self.y + dy, GRID_HEIGHT),
        }
    }
}

/// Wrap a coordinate into `[0, extent)`. A single step can underflow to -1
/// or overflow to `extent`; both map to the opposite edge.
#[inline]
fn wrap(v: i8, extent: i8) -> i8 {
    (v as i16).rem_euclid(extent as i16) as i8
}

/// The unit direction the snake's head moves on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Unit delta `(dx, dy)`; exactly one component is nonzero.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// True when `other` points directly opposite this heading.
    pub fn is_reverse_of(self, other: Self) -> bool {
        self == other.reverse()
    }
}

/// Engine lifecycle phase.
///
/// `Over` is a normal terminal branch (self-collision, or a won full grid),
/// not an error condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Over,
}

/// Discrete commands delivered to the engine by input sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Turn(Heading),
    Restart,
}
