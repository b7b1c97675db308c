pub mod display_launcher;

pub use display_launcher::DisplayLauncherPort;
