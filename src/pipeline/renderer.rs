use crate::core::color::Color;
use crate::core::framebuffer::FrameBuffer;
use crate::core::pipeline::PixelSource;
use crate::core::rasterizer::{Rasterizer, TriangleOutcome};
use crate::pipeline::transform::{Projection, Resolution, project_vertices};
use crate::scene::camera::Camera;
use crate::scene::mesh::Mesh;
use crate::scene::scene_object::{Pose, SceneObject};
use log::debug;
use std::ops::AddAssign;

/// Counters reported by a draw call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub triangles: usize,
    pub culled: usize,
    pub degenerate: usize,
    pub pixels_written: usize,
}

impl DrawStats {
    pub fn drawn(&self) -> usize {
        self.triangles - self.culled - self.degenerate
    }
}

impl AddAssign for DrawStats {
    fn add_assign(&mut self, other: Self) {
        self.triangles += other.triangles;
        self.culled += other.culled;
        self.degenerate += other.degenerate;
        self.pixels_written += other.pixels_written;
    }
}

/// The high-level renderer that orchestrates the pipeline stages:
/// transform -> face classification -> textured fill.
///
/// Draw calls run strictly in submission order and overwrite each other
/// pixel-for-pixel (painter's algorithm).
pub struct Renderer {
    pub rasterizer: Rasterizer,
    pub framebuffer: FrameBuffer,
    pub projection: Projection,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rasterizer: Rasterizer::new(),
            framebuffer: FrameBuffer::new(width, height),
            projection: Projection::default(),
        }
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.framebuffer.width, self.framebuffer.height)
    }

    /// Clears the framebuffer.
    pub fn clear(&mut self, color: Color) {
        self.framebuffer.clear(color);
    }

    pub fn draw_object<S: PixelSource + ?Sized>(
        &mut self,
        object: &SceneObject,
        camera: &Camera,
        texture: &S,
    ) -> DrawStats {
        self.draw_mesh(&object.mesh, &object.pose, camera, texture)
    }

    /// Draws one mesh instance.
    pub fn draw_mesh<S: PixelSource + ?Sized>(
        &mut self,
        mesh: &Mesh,
        pose: &Pose,
        camera: &Camera,
        texture: &S,
    ) -> DrawStats {
        // 1. Vertex Processing
        let screen_vertices = project_vertices(
            mesh.vertices(),
            pose,
            camera,
            &self.projection,
            self.resolution(),
        );

        // 2. Primitive Assembly, Classification & Fill
        let mut stats = DrawStats::default();
        for (tri, tex_coords) in mesh.faces() {
            let vertices = [
                screen_vertices[tri[0]],
                screen_vertices[tri[1]],
                screen_vertices[tri[2]],
            ];

            stats.triangles += 1;
            match self
                .rasterizer
                .draw_triangle(&mut self.framebuffer, texture, &vertices, tex_coords)
            {
                TriangleOutcome::Culled => stats.culled += 1,
                TriangleOutcome::Degenerate => stats.degenerate += 1,
                TriangleOutcome::Drawn { pixels } => stats.pixels_written += pixels,
            }
        }

        debug!(
            "Draw call: {} triangles, {} culled, {} degenerate, {} pixels",
            stats.triangles, stats.culled, stats.degenerate, stats.pixels_written
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rasterizer::CullMode;
    use crate::scene::texture::Texture;
    use nalgebra::Vector3;

    #[test]
    fn cube_seen_head_on_draws_only_front_face() {
        let mut renderer = Renderer::new(240, 160);
        let texture = Texture::checkerboard(4, 2, Color::WHITE, Color::MAGENTA);
        let stats = renderer.draw_mesh(
            &Mesh::unit_cube(),
            &Pose::default(),
            &Camera::default(),
            &texture,
        );

        assert_eq!(stats.triangles, 12);
        assert_eq!(stats.drawn(), 2);
        assert!(stats.pixels_written > 0);
        assert_ne!(renderer.framebuffer.get_pixel(120, 80), Color::BLACK);
        assert_eq!(renderer.framebuffer.get_pixel(5, 5), Color::BLACK);
    }

    #[test]
    fn disabling_culling_draws_every_face() {
        let mut renderer = Renderer::new(240, 160);
        renderer.rasterizer.set_cull_mode(CullMode::None);
        let texture = Texture::checkerboard(4, 2, Color::WHITE, Color::MAGENTA);
        let stats = renderer.draw_mesh(
            &Mesh::unit_cube(),
            &Pose::default(),
            &Camera::default(),
            &texture,
        );
        assert_eq!(stats.culled, 0);
        // Back-facing sides still cover area on screen.
        assert_eq!(stats.drawn(), 12);
    }

    #[test]
    fn object_off_screen_writes_nothing() {
        let mut renderer = Renderer::new(64, 64);
        let texture = Texture::checkerboard(4, 2, Color::WHITE, Color::MAGENTA);
        let pose = Pose::at(Vector3::new(-50.0, 0.0, 0.0));
        let stats = renderer.draw_mesh(&Mesh::unit_cube(), &pose, &Camera::default(), &texture);
        assert_eq!(stats.pixels_written, 0);
        assert!(
            renderer
                .framebuffer
                .color_buffer
                .iter()
                .all(|&c| c == Color::BLACK)
        );
    }

    #[test]
    fn stats_accumulate() {
        let mut total = DrawStats::default();
        total += DrawStats {
            triangles: 2,
            culled: 1,
            degenerate: 0,
            pixels_written: 10,
        };
        total += DrawStats {
            triangles: 3,
            culled: 0,
            degenerate: 1,
            pixels_written: 5,
        };
        assert_eq!(total.triangles, 5);
        assert_eq!(total.drawn(), 3);
        assert_eq!(total.pixels_written, 15);
    }
}
