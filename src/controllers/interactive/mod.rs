//! Interactive controller for keyboard-driven fractal zoom.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: a `KeyStatePort` polled once per event-loop tick
//! - **Output**: the owned `PixelBuffer`, lent to the presenter after a render
//! - **Core**: `render_frame` from `core/` does the actual computation

mod controller;
pub mod ports;
mod types;

pub use controller::InteractiveController;
pub use ports::KeyStatePort;
pub use types::{ControlKey, TickOutcome};
