use crate::core::data::complex::Complex;

/// Squared modulus beyond which an orbit counts as escaped (|z| > 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

pub trait EscapeTimeAlgorithm {
    /// Returns the 0-based iteration at which the orbit of `point` escaped,
    /// or `max_iterations` if it stayed bounded.
    fn escape_time(&self, point: Complex, max_iterations: u32) -> u32;
}
