pub mod errors;
pub mod launcher;
pub mod presenter;
