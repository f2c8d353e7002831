use crate::core::geometry::{ScreenVertex, TexCoord};
use crate::core::math::interpolation::{
    barycentric_coordinates, interpolate_uv, is_degenerate, is_inside_triangle,
};
use crate::core::pipeline::{PixelSource, PixelTarget};
use crate::core::sampler::sample_nearest;
use nalgebra::{Point2, Point3, Vector3};

/// The Rasterizer classifies triangles and fills the survivors onto a target.
pub struct Rasterizer {
    pub cull_mode: CullMode,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum CullMode {
    /// Keep only triangles whose NDC facing normal has a negative z.
    Back,
    /// The inverse of `Back`.
    Front,
    None,
}

/// What happened to a single triangle.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum TriangleOutcome {
    Culled,
    /// Zero-area or non-finite after projection.
    Degenerate,
    Drawn { pixels: usize },
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            cull_mode: CullMode::Back,
        }
    }

    pub fn set_cull_mode(&mut self, mode: CullMode) {
        self.cull_mode = mode;
    }

    /// Screen-space facing normal: `cross(v1 - v0, v2 - v0)` over the
    /// post-divide NDC positions, in the triangle's listed order.
    #[inline]
    pub fn facing_normal(ndc: &[Point3<f32>; 3]) -> Vector3<f32> {
        let edge1 = ndc[1] - ndc[0];
        let edge2 = ndc[2] - ndc[0];
        edge1.cross(&edge2)
    }

    /// Face Classifier. Only the sign of the normal's z component matters,
    /// so the normal is never normalized.
    pub fn is_culled(&self, ndc: &[Point3<f32>; 3]) -> bool {
        let facing_z = Self::facing_normal(ndc).z;
        match self.cull_mode {
            CullMode::Back => facing_z >= 0.0,
            CullMode::Front => facing_z < 0.0,
            CullMode::None => false,
        }
    }

    /// Classifies and, if it survives, fills one triangle.
    pub fn draw_triangle<T, S>(
        &self,
        target: &mut T,
        texture: &S,
        vertices: &[ScreenVertex; 3],
        tex_coords: &[TexCoord; 3],
    ) -> TriangleOutcome
    where
        T: PixelTarget + ?Sized,
        S: PixelSource + ?Sized,
    {
        if vertices.iter().any(|v| !v.is_finite()) {
            return TriangleOutcome::Degenerate;
        }

        let ndc = [vertices[0].ndc, vertices[1].ndc, vertices[2].ndc];
        if self.is_culled(&ndc) {
            return TriangleOutcome::Culled;
        }

        let screen = [vertices[0].screen, vertices[1].screen, vertices[2].screen];
        if is_degenerate(screen[0], screen[1], screen[2]) {
            return TriangleOutcome::Degenerate;
        }

        let pixels = self.fill_triangle(target, texture, &screen, tex_coords);
        TriangleOutcome::Drawn { pixels }
    }

    /// Fills a screen-space triangle with nearest-neighbor texture samples.
    ///
    /// Every integer pixel of the clamped bounding box is tested. Pixels are
    /// overwritten unconditionally (no depth test, no blending). Returns the
    /// number of pixels written.
    pub fn fill_triangle<T, S>(
        &self,
        target: &mut T,
        texture: &S,
        screen: &[Point2<f32>; 3],
        tex_coords: &[TexCoord; 3],
    ) -> usize
    where
        T: PixelTarget + ?Sized,
        S: PixelSource + ?Sized,
    {
        let Some((start_x, start_y, end_x, end_y)) =
            Self::clamped_bounding_box(screen, target.width(), target.height())
        else {
            return 0;
        };

        let mut written = 0;
        for x in start_x..=end_x {
            for y in start_y..=end_y {
                let p = Point2::new(x as f32, y as f32);

                let Some(bary) = barycentric_coordinates(p, screen[0], screen[1], screen[2])
                else {
                    return written;
                };
                if !is_inside_triangle(bary) {
                    continue;
                }

                let uv = interpolate_uv(bary, tex_coords);
                target.set_pixel(x, y, sample_nearest(texture, uv));
                written += 1;
            }
        }
        written
    }

    /// Integer bounding box of the triangle clamped to
    /// `[0, width - 1] x [0, height - 1]`, inclusive.
    /// `None` when the clamped box is empty (triangle entirely off-surface).
    pub fn clamped_bounding_box(
        points: &[Point2<f32>; 3],
        width: usize,
        height: usize,
    ) -> Option<(usize, usize, usize, usize)> {
        if width == 0 || height == 0 {
            return None;
        }

        let min_x = points[0].x.min(points[1].x).min(points[2].x).max(0.0);
        let min_y = points[0].y.min(points[1].y).min(points[2].y).max(0.0);
        let max_x = points[0].x.max(points[1].x).max(points[2].x).min(width as f32 - 1.0);
        let max_y = points[0].y.max(points[1].y).max(points[2].y).min(height as f32 - 1.0);

        let (start_x, end_x) = (min_x as i64, max_x.floor() as i64);
        let (start_y, end_y) = (min_y as i64, max_y.floor() as i64);
        if end_x < start_x || end_y < start_y {
            return None;
        }

        Some((
            start_x as usize,
            start_y as usize,
            end_x as usize,
            end_y as usize,
        ))
    }
}
