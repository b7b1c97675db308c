use std::time::Instant;

use log::{debug, info};

use crate::controllers::interactive::ports::KeyStatePort;
use crate::controllers::interactive::types::{ControlKey, TickOutcome};
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use crate::core::view::ViewLimits;

/// Owns the render configuration and the pixel buffer, and turns polled key
/// state into zoom changes and re-renders.
///
/// Everything runs on the event-loop thread: a render started by [`tick`]
/// completes before the tick returns.
///
/// [`tick`]: InteractiveController::tick
#[derive(Debug)]
pub struct InteractiveController {
    config: RenderConfig,
    limits: ViewLimits,
    buffer: PixelBuffer,
    render_count: u64,
}

impl InteractiveController {
    /// Starts the view at `limits.initial_zoom`, replacing the zoom carried
    /// by `config`.
    pub fn new(
        config: RenderConfig,
        limits: ViewLimits,
        buffer: PixelBuffer,
    ) -> Result<Self, RenderConfigError> {
        Ok(Self {
            config: config.with_zoom(limits.initial_zoom)?,
            limits,
            buffer,
            render_count: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn render(&mut self) {
        let start = Instant::now();

        render_frame(&self.config, &mut self.buffer);
        self.render_count += 1;

        debug!(
            "rendered {} frame {} at zoom {:.2} in {:?}",
            self.config.fractal_kind(),
            self.render_count,
            self.config.zoom(),
            start.elapsed()
        );
    }

    /// Handles one polled frame of the event loop.
    ///
    /// Holding a zoom key re-renders on every tick it stays down. When both
    /// zoom keys are held their steps cancel out and one render is done.
    pub fn tick<K: KeyStatePort + ?Sized>(&mut self, keys: &K) -> TickOutcome {
        if keys.is_key_down(ControlKey::Exit) {
            info!("exit key pressed, closing window");
            return TickOutcome::CloseRequested;
        }

        let zoom_in = keys.is_key_down(ControlKey::ZoomIn);
        let zoom_out = keys.is_key_down(ControlKey::ZoomOut);

        if zoom_in {
            self.config.adjust_zoom(self.limits.zoom_step, self.limits.min_zoom);
        }
        if zoom_out {
            self.config.adjust_zoom(-self.limits.zoom_step, self.limits.min_zoom);
        }

        if zoom_in || zoom_out {
            self.render();
            TickOutcome::Rendered
        } else {
            TickOutcome::Idle
        }
    }
}
