use crate::core::data::render_config::DEFAULT_ZOOM;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub initial_zoom: f64,
    pub zoom_step: f64,
    pub min_zoom: f64,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            initial_zoom: DEFAULT_ZOOM,
            zoom_step: 0.1,
            min_zoom: 0.1,
        }
    }
}
