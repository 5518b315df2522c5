//! Render snapshot - the engine-to-renderer contract
//!
//! A snapshot is a plain copy of everything a renderer needs: the snake
//! head-first, the apple, score, and phase. Renderers are pure consumers;
//! they never reach back into the session.

use arrayvec::ArrayVec;

use crate::types::{Cell, Phase, GRID_CELLS};

/// Which part of the snake a cell belongs to (distinct render colors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Head,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Snake cells head-first; `snake[0]` is the head.
    pub snake: ArrayVec<Cell, GRID_CELLS>,
    pub apple: Option<Cell>,
    pub score: u32,
    pub phase: Phase,
    /// Set when the run ended by filling the entire grid.
    pub won: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.apple = None;
        self.score = 0;
        self.phase = Phase::Idle;
        self.won = false;
    }

    /// Iterate snake cells with their head/body tag.
    pub fn segments(&self) -> impl Iterator<Item = (Cell, Segment)> + '_ {
        self.snake.iter().enumerate().map(|(i, &cell)| {
            let tag = if i == 0 { Segment::Head } else { Segment::Body };
            (cell, tag)
        })
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: ArrayVec::new(),
            apple: None,
            score: 0,
            phase: Phase::Idle,
            won: false,
        }
    }
}
