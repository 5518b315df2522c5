//! Input module - turns terminal events into discrete game commands
//!
//! Two sources feed the engine: keyboard (arrows/wasd/hjkl plus restart
//! keys) and mouse drags classified as swipes. Neither holds game state;
//! they only produce `GameCommand` values.

pub mod map;
pub mod swipe;

pub use map::{handle_key_event, should_quit};
pub use swipe::SwipeTracker;
