use crate::core::color::Color;

/// Read access to a 2D grid of colors: what a texture provider must supply.
///
/// Coordinates are `x < width()`, `y < height()`. Reading outside that range
/// is a caller bug and implementations may panic.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get_pixel(&self, x: usize, y: usize) -> Color;
}

/// A writable render surface. The rasterizer only writes in-bounds pixels
/// and never reads back what it wrote: each write overwrites.
pub trait PixelTarget: PixelSource {
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
}
