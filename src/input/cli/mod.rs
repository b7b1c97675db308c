pub mod args;

pub use args::{CliCommand, CliError, parse_args};
