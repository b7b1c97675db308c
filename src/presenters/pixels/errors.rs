use thiserror::Error;
use winit::error::{EventLoopError, OsError};

use crate::adapters::pixel_format::FrameSizeMismatch;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to run event loop: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("pixel surface error: {0}")]
    Surface(#[from] pixels::Error),
    #[error("failed to copy frame: {0}")]
    Frame(#[from] FrameSizeMismatch),
}
