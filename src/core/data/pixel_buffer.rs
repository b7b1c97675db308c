use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel buffer size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("pixel at x:{}, y:{} outside of {width}x{height} buffer", pixel.x, pixel.y)]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
}

/// Fixed-size RGBA8 image, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            data: vec![0; buffer_size(width, height)],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn contains(&self, pixel: Point) -> bool {
        pixel.x < self.width && pixel.y < self.height
    }

    fn index_of(&self, pixel: Point) -> usize {
        (pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.contains(pixel) {
            return None;
        }

        let index = self.index_of(pixel);

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
            a: self.data[index + 3],
        })
    }

    /// Writes a single pixel. Frame rendering goes through [`fill_with`].
    ///
    /// [`fill_with`]: PixelBuffer::fill_with
    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.contains(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        let index = self.index_of(pixel);
        self.data[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    /// Overwrites every pixel with the colour produced for its coordinate.
    pub fn fill_with(&mut self, mut colour_at: impl FnMut(Point) -> Colour) {
        let width = self.width as usize;

        for (index, rgba) in self.data.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let pixel = Point {
                x: (index % width) as u32,
                y: (index / width) as u32,
            };

            rgba.copy_from_slice(&colour_at(pixel).to_rgba());
        }
    }
}
