#[cfg(feature = "gui")]
mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::interactive::{ControlKey, InteractiveController, KeyStatePort, TickOutcome};
pub use crate::core::actions::render_frame::render_frame::render_frame;
pub use crate::core::colour_mapping::warm_ramp::{BOUNDED_COLOUR, colourize};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_config::{RenderConfig, RenderConfigError};
pub use crate::core::fractals::fractal_kinds::{FractalKind, UnknownFractalKindError};
pub use crate::core::view::ViewLimits;
pub use input::commands::ports::DisplayLauncherPort;
pub use input::commands::run::{IMAGE_HEIGHT, IMAGE_WIDTH, RunCommand, RunError};

#[cfg(feature = "gui")]
pub use presenters::pixels::errors::DisplayError;
#[cfg(feature = "gui")]
pub use presenters::pixels::launcher::PixelsDisplayLauncher;
