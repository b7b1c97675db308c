use crate::core::actions::render_frame::ports::escape_time_algorithm::{
    ESCAPE_RADIUS_SQUARED, EscapeTimeAlgorithm,
};
use crate::core::data::complex::Complex;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm;

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    fn escape_time(&self, c: Complex, max_iterations: u32) -> u32 {
        let mut z = Complex::ZERO;

        for iteration in 0..max_iterations {
            z = z.square() + c;

            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return iteration;
            }
        }

        max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for max_iterations in [1, 2, 50, 256, 1000] {
            assert_eq!(
                MandelbrotAlgorithm.escape_time(Complex::ZERO, max_iterations),
                max_iterations
            );
        }
    }

    #[test]
    fn points_outside_radius_escape_on_first_iteration() {
        let points = [
            Complex::new(3.0, 0.0),
            Complex::new(0.0, 3.0),
            Complex::new(-2.5, 0.0),
            Complex::new(2.1, 0.0),
            Complex::new(0.0, -2.01),
            Complex::new(-2.1, 2.1),
        ];

        for point in points {
            assert_eq!(MandelbrotAlgorithm.escape_time(point, 50), 0, "{point:?}");
        }
    }

    #[test]
    fn points_with_large_components_escape_before_cap() {
        for step in 0..40_u32 {
            let offset = f64::from(step) * 0.1;
            let points = [
                Complex::new(2.05 + offset, -1.0),
                Complex::new(-2.05 - offset, 1.0),
                Complex::new(0.5, 2.05 + offset),
                Complex::new(-0.5, -2.05 - offset),
            ];

            for point in points {
                assert!(MandelbrotAlgorithm.escape_time(point, 100) < 3, "{point:?}");
            }
        }
    }

    #[test]
    fn escape_count_is_zero_based() {
        // c = 1: z1 = 1, z2 = 2, z3 = 5 (|z|² = 25 > 4) on the third update.
        assert_eq!(MandelbrotAlgorithm.escape_time(Complex::new(1.0, 0.0), 50), 2);
    }

    #[test]
    fn known_escape_counts() {
        assert_eq!(MandelbrotAlgorithm.escape_time(Complex::new(0.3, 0.0), 50), 11);
        assert_eq!(MandelbrotAlgorithm.escape_time(Complex::new(0.5, 0.5), 50), 4);
        assert_eq!(MandelbrotAlgorithm.escape_time(Complex::new(-1.75, -0.03), 50), 9);
    }

    #[test]
    fn bounded_points_return_cap() {
        assert_eq!(MandelbrotAlgorithm.escape_time(Complex::new(-1.0, 0.0), 50), 50);
        assert_eq!(MandelbrotAlgorithm.escape_time(Complex::new(0.0, 1.0), 50), 50);
    }

    #[test]
    fn zero_cap_returns_zero() {
        assert_eq!(MandelbrotAlgorithm.escape_time(Complex::new(5.0, 5.0), 0), 0);
    }
}
