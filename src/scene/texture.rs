use crate::core::color::Color;
use crate::core::pipeline::PixelSource;
use crate::core::sampler::sample_nearest;
use image::{DynamicImage, RgbaImage};
use log::info;
use nalgebra::Vector2;
use std::path::Path;
use std::sync::Arc;

/// A decoded, read-only RGBA texture. Always at least 1x1.
#[derive(Debug, Clone)]
pub struct Texture {
    pub image: Arc<RgbaImage>,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path_ref = path.as_ref();
        let img = image::open(path_ref).map_err(|e| format!("Failed to load texture: {}", e))?;
        let texture = Self::from_image(img)?;

        info!(
            "Loaded texture: {:?} ({}x{})",
            path_ref, texture.width, texture.height
        );
        Ok(texture)
    }

    pub fn from_image(img: DynamicImage) -> Result<Self, String> {
        Self::from_rgba(img.into_rgba8())
    }

    pub fn from_rgba(image: RgbaImage) -> Result<Self, String> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(format!("Texture has empty dimensions {}x{}", width, height));
        }
        Ok(Self {
            width,
            height,
            image: Arc::new(image),
        })
    }

    /// Builds a texture from row-major colors.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Color]) -> Result<Self, String> {
        if pixels.len() != (width as usize) * (height as usize) {
            return Err(format!(
                "Expected {} pixels for a {}x{} texture, got {}",
                width as usize * height as usize,
                width,
                height,
                pixels.len()
            ));
        }
        let image = RgbaImage::from_fn(width, height, |x, y| {
            pixels[(y * width + x) as usize].into()
        });
        Self::from_rgba(image)
    }

    /// A `size x size` checkerboard with `cells` squares per side.
    pub fn checkerboard(size: u32, cells: u32, a: Color, b: Color) -> Self {
        let size = size.max(1);
        let cell = (size / cells.max(1)).max(1);
        let image = RgbaImage::from_fn(size, size, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                a.into()
            } else {
                b.into()
            }
        });
        Self {
            width: size,
            height: size,
            image: Arc::new(image),
        }
    }

    /// Nearest-neighbor sample with repeat wrapping.
    pub fn sample(&self, uv: Vector2<f32>) -> Color {
        sample_nearest(self, uv)
    }
}

impl PixelSource for Texture {
    fn width(&self) -> usize {
        self.width as usize
    }

    fn height(&self) -> usize {
        self.height as usize
    }

    #[inline]
    fn get_pixel(&self, x: usize, y: usize) -> Color {
        (*self.image.get_pixel(x as u32, y as u32)).into()
    }
}
