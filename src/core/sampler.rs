use crate::core::color::Color;
use crate::core::pipeline::PixelSource;
use nalgebra::Vector2;

/// Nearest-neighbor texture lookup with repeat wrapping.
///
/// Axis convention: `u` selects the texel **row** and `v` the texel
/// **column** (`x = floor(v * width)`, `y = floor(u * height)`). Texture
/// coordinates in this crate are authored against that mapping.
///
/// An empty source samples as transparent black.
pub fn sample_nearest<T: PixelSource + ?Sized>(texture: &T, uv: Vector2<f32>) -> Color {
    let width = texture.width();
    let height = texture.height();
    if width == 0 || height == 0 {
        return Color::default();
    }

    // Repeat mode: 1.25 -> 0.25, -0.25 -> 0.75
    let u = uv.x.rem_euclid(1.0);
    let v = uv.y.rem_euclid(1.0);

    let tex_y = (u * height as f32).floor() as i64;
    let tex_x = (v * width as f32).floor() as i64;

    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    let tex_y = tex_y.clamp(0, height as i64 - 1) as usize;
    let tex_x = tex_x.clamp(0, width as i64 - 1) as usize;

    texture.get_pixel(tex_x, tex_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::framebuffer::FrameBuffer;
    use crate::core::pipeline::PixelTarget;

    const A: Color = Color::new(255, 0, 0);
    const B: Color = Color::new(0, 255, 0);
    const C: Color = Color::new(0, 0, 255);
    const D: Color = Color::new(255, 255, 0);

    /// Row-major 2x2: row 0 = [A, B], row 1 = [C, D].
    fn quad() -> FrameBuffer {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(0, 0, A);
        fb.set_pixel(1, 0, B);
        fb.set_pixel(0, 1, C);
        fb.set_pixel(1, 1, D);
        fb
    }

    #[test]
    fn u_picks_rows_and_v_picks_columns() {
        let tex = quad();
        assert_eq!(sample_nearest(&tex, Vector2::new(0.1, 0.1)), A);
        assert_eq!(sample_nearest(&tex, Vector2::new(0.9, 0.1)), C);
        assert_eq!(sample_nearest(&tex, Vector2::new(0.1, 0.9)), B);
        assert_eq!(sample_nearest(&tex, Vector2::new(0.9, 0.9)), D);
    }

    #[test]
    fn wrapping_is_idempotent() {
        let tex = quad();
        let base = sample_nearest(&tex, Vector2::new(0.25, 0.75));
        assert_eq!(sample_nearest(&tex, Vector2::new(1.25, 0.75)), base);
        assert_eq!(sample_nearest(&tex, Vector2::new(-0.75, 2.75)), base);
    }

    #[test]
    fn boundary_values_stay_in_range() {
        let tex = quad();
        assert_eq!(sample_nearest(&tex, Vector2::new(1.0, 1.0)), A);
        assert_eq!(sample_nearest(&tex, Vector2::new(0.999_999, 0.999_999)), D);
        assert_eq!(sample_nearest(&tex, Vector2::new(-1e-12, -1e-12)), D);
    }

    #[test]
    fn empty_source_samples_transparent() {
        let tex = FrameBuffer::new(0, 0);
        assert_eq!(sample_nearest(&tex, Vector2::new(0.5, 0.5)), Color::default());
    }
}
