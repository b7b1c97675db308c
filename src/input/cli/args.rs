use std::ffi::OsString;
use std::str::FromStr;

use clap::Parser;
use clap::error::ErrorKind;
use thiserror::Error;

use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use crate::core::fractals::fractal_kinds::FractalKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Max iterations must be a positive number, got '{value}'")]
pub struct MaxIterationsError {
    pub value: String,
}

/// Render an escape-time fractal in a window; Up/Down zoom, Escape quits.
#[derive(Debug, Parser)]
#[command(name = "fractol", version)]
pub struct CliArgs {
    /// Fractal to render: mandelbrot, julia, or burning_ship
    #[arg(value_parser = FractalKind::from_str)]
    pub fractal_type: FractalKind,

    /// Iteration cap per pixel (positive integer)
    #[arg(allow_negative_numbers = true, value_parser = parse_max_iterations)]
    pub max_iterations: u32,

    // Anything after the iteration cap is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _extra: Vec<OsString>,
}

fn parse_max_iterations(value: &str) -> Result<u32, MaxIterationsError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|&iterations| iterations > 0)
        .and_then(|iterations| u32::try_from(iterations).ok())
        .ok_or_else(|| MaxIterationsError {
            value: value.to_owned(),
        })
}

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad argument count, unknown fractal or bad iteration cap; carries
    /// clap's rendered message including usage.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] RenderConfigError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Render(RenderConfig),
    /// `--help` or `--version` output; printed, then a successful exit.
    Info(String),
}

pub fn parse_args<I, T>(args: I) -> Result<CliCommand, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliArgs::try_parse_from(args) {
        Ok(args) => Ok(CliCommand::Render(RenderConfig::new(
            args.fractal_type,
            args.max_iterations,
        )?)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(CliCommand::Info(err.render().to_string()))
        }
        Err(err) => Err(CliError::Usage(err.render().to_string())),
    }
}
