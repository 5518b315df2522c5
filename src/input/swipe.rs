//! Swipe classification for pointer input.
//!
//! A press starts a gesture and the matching release classifies it: the
//! displacement's dominant axis and sign pick the heading, and drags
//! shorter than the minimum displacement are dropped as noise. This is the
//! terminal-mouse analogue of touch swipes.

use crate::types::{Heading, DEFAULT_SWIPE_MIN};

/// Tracks one in-flight press/release gesture.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    origin: Option<(i32, i32)>,
    min_distance: i32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_min_distance(DEFAULT_SWIPE_MIN)
    }

    pub fn with_min_distance(min_distance: i32) -> Self {
        Self {
            origin: None,
            min_distance,
        }
    }

    /// Begin a gesture at the pressed position.
    pub fn press(&mut self, x: i32, y: i32) {
        self.origin = Some((x, y));
    }

    /// End the gesture and classify it.
    ///
    /// Returns `None` without a matching press, or when the drag stays
    /// under the minimum displacement on both axes.
    pub fn release(&mut self, x: i32, y: i32) -> Option<Heading> {
        let (sx, sy) = self.origin.take()?;
        let dx = x - sx;
        let dy = y - sy;

        if dx.abs().max(dy.abs()) < self.min_distance {
            return None;
        }

        if dx.abs() > dy.abs() {
            Some(if dx > 0 { Heading::Right } else { Heading::Left })
        } else {
            Some(if dy > 0 { Heading::Down } else { Heading::Up })
        }
    }

    /// Abandon the in-flight gesture, if any.
    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
