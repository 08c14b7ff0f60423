//! Display surface
//!
//! The renderer only needs to know the size of the target and how to put
//! colors into it. Windows, files and plain memory all hide behind [`Surface`].

use crate::color::{Color32, BLACK};

pub trait Surface {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Write one pixel, coordinates outside of the surface are ignored
    fn put_pixel(&mut self, x: usize, y: usize, color: Color32);

    /// Fill `size`x`size` square with top left corner at `[x, y]`.
    /// Parts reaching over the edge are clipped.
    fn put_square(&mut self, x: usize, y: usize, size: usize, color: Color32) {
        let x_end = usize::min(x.saturating_add(size), self.width());
        let y_end = usize::min(y.saturating_add(size), self.height());
        for py in y..y_end {
            for px in x..x_end {
                self.put_pixel(px, py, color);
            }
        }
    }

    /// Present finished frame
    fn flip(&mut self) {}
}

/// Row major buffer of packed colors, `y = 0` is the top row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> FrameBuffer {
        FrameBuffer {
            width,
            height,
            pixels: vec![BLACK; width * height],
        }
    }

    /// Wrap existing pixel data.
    /// Returns `None` if `pixels` does not have `width * height` elements.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color32>) -> Option<FrameBuffer> {
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(FrameBuffer {
            width,
            height,
            pixels,
        })
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn clear(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    /// Drop old content and reallocate for new dimensions
    pub fn resize(&mut self, width: usize, height: usize) {
        log::debug!(
            "frame buffer resized {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        *self = FrameBuffer::new(width, height);
    }
}

impl Surface for FrameBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn put_pixel(&mut self, x: usize, y: usize, color: Color32) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    fn put_square(&mut self, x: usize, y: usize, size: usize, color: Color32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let x_end = usize::min(x.saturating_add(size), self.width);
        let y_end = usize::min(y.saturating_add(size), self.height);
        for row in y..y_end {
            let offset = row * self.width;
            self.pixels[offset + x..offset + x_end].fill(color);
        }
    }
}
