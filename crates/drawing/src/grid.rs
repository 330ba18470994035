//! Dense pixel grid produced by rasterizing a canvas

use crate::types::Rgba;

/// A fixed-size RGBA pixel grid in row-major order.
///
/// Produced by [`StrokeCanvas::rasterize`] or supplied by the caller as the
/// level's reference image. Grids being compared for scoring must have
/// identical dimensions.
///
/// [`StrokeCanvas::rasterize`]: crate::canvas::StrokeCanvas::rasterize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Grid dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    /// Create a new grid with the given dimensions, initialized fully transparent.
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; pixel_count],
        }
    }

    /// Fill the entire grid with a solid color.
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Get a pixel at the given coordinates.
    /// Returns None if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel at the given coordinates.
    /// Does nothing if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Whether this grid has the same dimensions as another.
    #[inline]
    pub fn same_dimensions(&self, other: &PixelGrid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Get direct access to the pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Get raw pixel data as bytes, suitable for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
