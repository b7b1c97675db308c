use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Colour of points that never escaped.
pub const BOUNDED_COLOUR: Colour = Colour::opaque(20, 20, 20);

/// Linear ramp from black towards orange: red at full scale, green at half
/// and blue at quarter scale of `iterations / max_iterations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarmRampColourMap {
    max_iterations: u32,
}

impl ColourMap for WarmRampColourMap {
    fn map(&self, iterations: u32) -> Colour {
        colourize(iterations, self.max_iterations)
    }
}

impl WarmRampColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[must_use]
pub fn colourize(iterations: u32, max_iterations: u32) -> Colour {
    if iterations >= max_iterations {
        return BOUNDED_COLOUR;
    }

    // iterations < max_iterations keeps every channel within u8 range
    let scale = |full_scale: u64| {
        (u64::from(iterations) * full_scale / u64::from(max_iterations)) as u8
    };

    Colour::opaque(scale(255), scale(128), scale(64))
}
