//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and the windowing system that feeds it key state.

pub mod key_state;

pub use key_state::KeyStatePort;
