use crate::core::actions::render_frame::ports::escape_time_algorithm::{
    ESCAPE_RADIUS_SQUARED, EscapeTimeAlgorithm,
};
use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

pub const JULIA_CONSTANT: Complex = Complex {
    real: -0.7,
    imag: 0.27015,
};

/// Julia set for a fixed additive constant; the pixel point seeds the orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
}

impl Default for JuliaAlgorithm {
    fn default() -> Self {
        Self {
            constant: JULIA_CONSTANT,
        }
    }
}

impl EscapeTimeAlgorithm for JuliaAlgorithm {
    fn escape_time(&self, point: Complex, max_iterations: u32) -> u32 {
        let orbit = (0..max_iterations).try_fold(point, |z, iteration| {
            let z = z.square() + self.constant;

            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                ControlFlow::Break(iteration)
            } else {
                ControlFlow::Continue(z)
            }
        });

        match orbit {
            ControlFlow::Break(iteration) => iteration,
            ControlFlow::Continue(_) => max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

    #[test]
    fn default_uses_fixed_constant() {
        assert_eq!(JuliaAlgorithm::default().constant, Complex::new(-0.7, 0.27015));
    }

    #[test]
    fn origin_stays_bounded() {
        assert_eq!(JuliaAlgorithm::default().escape_time(Complex::ZERO, 50), 50);
    }

    #[test]
    fn far_points_escape_immediately() {
        let algorithm = JuliaAlgorithm::default();

        assert_eq!(algorithm.escape_time(Complex::new(3.0, 0.0), 50), 0);
        assert_eq!(algorithm.escape_time(Complex::new(0.0, 3.0), 50), 0);
    }

    #[test]
    fn known_escape_counts() {
        let algorithm = JuliaAlgorithm::default();

        assert_eq!(algorithm.escape_time(Complex::new(1.0, 0.0), 50), 8);
        assert_eq!(algorithm.escape_time(Complex::new(0.3, 0.0), 50), 50);
        assert_eq!(algorithm.escape_time(Complex::new(0.0, 1.0), 50), 1);
    }

    #[test]
    fn seeds_orbit_with_point_instead_of_adding_it() {
        // The same plane point is bounded for Mandelbrot but escapes for Julia.
        let point = Complex::new(-1.0, 0.0);

        assert_eq!(MandelbrotAlgorithm.escape_time(point, 50), 50);
        assert_eq!(JuliaAlgorithm::default().escape_time(point, 50), 8);
    }
}
