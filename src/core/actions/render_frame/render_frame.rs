use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::colour_mapping::warm_ramp::WarmRampColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::RenderConfig;
use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::pixel_to_complex_coords::{PlaneMapping, pixel_to_complex_coords};

/// Recomputes every pixel of `buffer` for the fractal, cap and zoom in `config`.
pub fn render_frame(config: &RenderConfig, buffer: &mut PixelBuffer) {
    let colour_map = WarmRampColourMap::new(config.max_iterations());

    match config.fractal_kind() {
        FractalKind::Mandelbrot => render_with(&MandelbrotAlgorithm, &colour_map, config, buffer),
        FractalKind::Julia => render_with(&JuliaAlgorithm::default(), &colour_map, config, buffer),
        FractalKind::BurningShip => {
            render_with(&BurningShipAlgorithm, &colour_map, config, buffer)
        }
    }
}

pub fn render_with<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
    config: &RenderConfig,
    buffer: &mut PixelBuffer,
) where
    Alg: EscapeTimeAlgorithm,
    CMap: ColourMap,
{
    let mapping = PlaneMapping::new(buffer.width(), buffer.height(), config.zoom());
    let max_iterations = config.max_iterations();

    buffer.fill_with(|pixel| {
        let point = pixel_to_complex_coords(pixel, &mapping);
        colour_map.map(algorithm.escape_time(point, max_iterations))
    });
}
