//! Terminal rendering module.
//!
//! Renders into a simple framebuffer that is then diff-flushed to the
//! terminal, rather than using a widget/layout library.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Precise control over cell aspect ratio (2 chars wide per grid cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, Rgb, ScreenCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
