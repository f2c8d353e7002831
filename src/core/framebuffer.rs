use crate::core::color::Color;
use crate::core::pipeline::{PixelSource, PixelTarget};

/// Represents the 2D output color buffer of a render.
///
/// There is no depth buffer: draws overwrite in submission order.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub color_buffer: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color_buffer: vec![Color::BLACK; width * height],
        }
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color);
    }

    /// Bounds-checked read.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.color_buffer[self.index(x, y)])
    }

    /// Packs the buffer row-major into `0xAARRGGBB` words.
    pub fn write_argb(&self, buffer: &mut [u32]) {
        for (dst, src) in buffer.iter_mut().zip(&self.color_buffer) {
            *dst = src.to_argb();
        }
    }
}

impl PixelSource for FrameBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get_pixel(&self, x: usize, y: usize) -> Color {
        self.color_buffer[self.index(x, y)]
    }
}

impl PixelTarget for FrameBuffer {
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.color_buffer[idx] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_and_overwrite() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.clear(Color::WHITE);
        assert!(fb.color_buffer.iter().all(|&c| c == Color::WHITE));

        fb.set_pixel(3, 2, Color::MAGENTA);
        assert_eq!(fb.get_pixel(3, 2), Color::MAGENTA);
        fb.set_pixel(3, 2, Color::BLACK);
        assert_eq!(fb.pixel(3, 2), Some(Color::BLACK));
    }

    #[test]
    fn out_of_bounds_write_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(2, 0, Color::WHITE);
        fb.set_pixel(0, 7, Color::WHITE);
        assert!(fb.color_buffer.iter().all(|&c| c == Color::BLACK));
        assert_eq!(fb.pixel(2, 0), None);
    }

    #[test]
    fn argb_export_is_row_major() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set_pixel(1, 0, Color::new(0xff, 0, 0));
        let mut out = [0u32; 2];
        fb.write_argb(&mut out);
        assert_eq!(out, [0xff00_0000, 0xffff_0000]);
    }
}
