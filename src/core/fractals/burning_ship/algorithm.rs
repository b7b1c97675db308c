use crate::core::actions::render_frame::ports::escape_time_algorithm::{
    ESCAPE_RADIUS_SQUARED, EscapeTimeAlgorithm,
};
use crate::core::data::complex::Complex;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BurningShipAlgorithm;

impl EscapeTimeAlgorithm for BurningShipAlgorithm {
    fn escape_time(&self, c: Complex, max_iterations: u32) -> u32 {
        let mut z = Complex::ZERO;

        for iteration in 0..max_iterations {
            z = z.abs_components().square() + c;

            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return iteration;
            }
        }

        max_iterations
    }
}
