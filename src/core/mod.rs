//! Core module - pure game rules with no I/O dependencies
//!
//! Everything that defines Snake lives here: the session state machine,
//! apple placement, the seeded RNG, and the render snapshot. The module
//! never touches the terminal, so the rules are testable headless.

pub mod apple;
pub mod grid;
pub mod rng;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use apple::place_apple;
pub use grid::OccupancyGrid;
pub use rng::GameRng;
pub use session::GameSession;
pub use snapshot::{GameSnapshot, Segment};
