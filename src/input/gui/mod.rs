//! Window-system input adapter.
//!
//! Tracks which control keys winit reports as held so the interactive
//! controller can poll them once per tick.

mod keyboard;

pub use keyboard::KeyboardState;
