use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

/// Width of the visible plane region at zoom 1, centred on the origin.
pub const PLANE_WIDTH: f64 = 4.0;

#[must_use]
pub fn plane_range(zoom: f64) -> f64 {
    PLANE_WIDTH / zoom
}

/// Pixel grid to complex plane transform for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMapping {
    width: f64,
    height: f64,
    range: f64,
}

impl PlaneMapping {
    #[must_use]
    pub fn new(width: u32, height: u32, zoom: f64) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
            range: plane_range(zoom),
        }
    }
}

#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, mapping: &PlaneMapping) -> Complex {
    let real = (f64::from(pixel.x) - mapping.width / 2.0) * mapping.range / mapping.width;
    let imag = (f64::from(pixel.y) - mapping.height / 2.0) * mapping.range / mapping.height;

    Complex { real, imag }
}
