use crate::core::fractals::fractal_kinds::FractalKind;
use thiserror::Error;

pub const DEFAULT_ZOOM: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenderConfigError {
    #[error("Max iterations must be a positive number")]
    ZeroMaxIterations,
    #[error("zoom must be positive and finite, got {0}")]
    InvalidZoom(f64),
}

/// What to render. The fractal and iteration cap are fixed at construction;
/// only the zoom changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    fractal_kind: FractalKind,
    max_iterations: u32,
    zoom: f64,
}

impl RenderConfig {
    pub fn new(fractal_kind: FractalKind, max_iterations: u32) -> Result<Self, RenderConfigError> {
        if max_iterations == 0 {
            return Err(RenderConfigError::ZeroMaxIterations);
        }

        Ok(Self {
            fractal_kind,
            max_iterations,
            zoom: DEFAULT_ZOOM,
        })
    }

    pub fn with_zoom(mut self, zoom: f64) -> Result<Self, RenderConfigError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(RenderConfigError::InvalidZoom(zoom));
        }

        self.zoom = zoom;
        Ok(self)
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKind {
        self.fractal_kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Shifts the zoom by `delta`, never going below `min_zoom`.
    ///
    /// A result that would not be a positive finite zoom leaves the zoom
    /// unchanged.
    pub fn adjust_zoom(&mut self, delta: f64, min_zoom: f64) {
        let zoom = (self.zoom + delta).max(min_zoom);

        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_constructor() {
        let config = RenderConfig::new(FractalKind::Julia, 256).unwrap();

        assert_eq!(config.fractal_kind(), FractalKind::Julia);
        assert_eq!(config.max_iterations(), 256);
        assert_eq!(config.zoom(), DEFAULT_ZOOM);
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            RenderConfig::new(FractalKind::Mandelbrot, 0),
            Err(RenderConfigError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_with_zoom_rejects_non_positive_and_non_finite() {
        let config = RenderConfig::new(FractalKind::Mandelbrot, 10).unwrap();

        assert_eq!(config.with_zoom(0.0), Err(RenderConfigError::InvalidZoom(0.0)));
        assert_eq!(config.with_zoom(-1.0), Err(RenderConfigError::InvalidZoom(-1.0)));
        assert!(config.with_zoom(f64::INFINITY).is_err());
        assert!(config.with_zoom(f64::NAN).is_err());
        assert_eq!(config.with_zoom(2.5).unwrap().zoom(), 2.5);
    }

    #[test]
    fn test_adjust_zoom_adds_delta() {
        let mut config = RenderConfig::new(FractalKind::Mandelbrot, 10).unwrap();

        config.adjust_zoom(0.5, 0.1);

        assert_eq!(config.zoom(), 1.5);
    }

    #[test]
    fn test_adjust_zoom_clamps_at_floor() {
        let mut config = RenderConfig::new(FractalKind::Mandelbrot, 10).unwrap();

        for _ in 0..50 {
            config.adjust_zoom(-0.1, 0.1);
        }

        assert_eq!(config.zoom(), 0.1);
    }

    #[test]
    fn test_adjust_zoom_ignores_degenerate_floor() {
        let mut config = RenderConfig::new(FractalKind::Mandelbrot, 10).unwrap();

        config.adjust_zoom(-5.0, 0.0);

        assert_eq!(config.zoom(), DEFAULT_ZOOM);
    }
}
