#[cfg(feature = "gui")]
pub mod pixels;
