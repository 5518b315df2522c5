//! Terminal Snake.
//!
//! A fixed-tick, wrap-around grid engine (`core`), terminal input
//! translation (`input`), and a framebuffer renderer (`term`). The binary
//! in `main.rs` wires them into a render/poll/tick loop; everything here
//! runs headless.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
