use std::error::Error;
use std::ffi::OsString;
use std::process::ExitCode;

use log::{error, info};
use thiserror::Error;

use crate::controllers::interactive::InteractiveController;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::render_config::RenderConfigError;
use crate::core::view::ViewLimits;
use crate::input::cli::{CliCommand, CliError, parse_args};
use crate::input::commands::ports::DisplayLauncherPort;

pub const IMAGE_WIDTH: u32 = 512;
pub const IMAGE_HEIGHT: u32 = 512;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error("failed to allocate pixel buffer: {0}")]
    Buffer(#[from] PixelBufferError),
    #[error("invalid view settings: {0}")]
    View(#[from] RenderConfigError),
    #[error("{0}")]
    Display(Box<dyn Error>),
}

/// Parses the command line, renders the first frame and hands control to
/// the display until its window is closed.
pub struct RunCommand<L: DisplayLauncherPort> {
    launcher: L,
}

impl<L: DisplayLauncherPort> RunCommand<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Runs the command and reports failures on stdout.
    pub fn execute<I, T>(&self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(RunError::Cli(CliError::Usage(message))) => {
                print!("{message}");
                ExitCode::FAILURE
            }
            Err(RunError::Cli(err)) => {
                println!("{err}");
                ExitCode::FAILURE
            }
            Err(err) => {
                error!("{err}");
                println!("{err}");
                ExitCode::FAILURE
            }
        }
    }

    pub fn run<I, T>(&self, args: I) -> Result<(), RunError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let config = match parse_args(args)? {
            CliCommand::Render(config) => config,
            CliCommand::Info(text) => {
                print!("{text}");
                return Ok(());
            }
        };

        info!(
            "rendering {} with max {} iterations at {}x{}",
            config.fractal_kind(),
            config.max_iterations(),
            IMAGE_WIDTH,
            IMAGE_HEIGHT
        );

        let buffer = PixelBuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT)?;
        let mut controller = InteractiveController::new(config, ViewLimits::default(), buffer)?;
        controller.render();

        self.launcher
            .launch(controller)
            .map_err(|err| RunError::Display(Box::new(err)))
    }
}
