use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::adapters::pixel_format::copy_rgba_frame;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::pixels::errors::DisplayError;

/// Image surface attached to the window at its origin, scaled to fill it.
pub struct PixelsPresenter<'win> {
    pixels: Pixels<'win>,
}

impl<'win> PixelsPresenter<'win> {
    pub fn new(window: &'win Window, width: u32, height: u32) -> Result<Self, DisplayError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self { pixels })
    }

    /// Copies the controller's buffer into the surface frame.
    pub fn draw(&mut self, buffer: &PixelBuffer) -> Result<(), DisplayError> {
        copy_rgba_frame(buffer.data(), self.pixels.frame_mut())?;
        Ok(())
    }

    pub fn render(&self) -> Result<(), DisplayError> {
        self.pixels.render()?;
        Ok(())
    }
}
