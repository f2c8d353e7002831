use crate::core::geometry::ScreenVertex;
use crate::core::math::transform::{TransformFactory, apply_perspective_division, ndc_to_screen};
use crate::scene::camera::Camera;
use crate::scene::scene_object::Pose;
use nalgebra::{Matrix4, Point3};

/// Render-target size in pixels. Drives both the projection aspect ratio and
/// the NDC-to-pixel mapping, so both stages always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Perspective parameters. Defaults: 90 degree vertical FOV, near 0.1, far 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_rad: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_rad: 90.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self, resolution: Resolution) -> Matrix4<f32> {
        TransformFactory::perspective(resolution.aspect_ratio(), self.fov_y_rad, self.near, self.far)
    }
}

/// `projection * view * model` for one draw call.
pub fn mvp_matrix(
    pose: &Pose,
    camera: &Camera,
    projection: &Projection,
    resolution: Resolution,
) -> Matrix4<f32> {
    projection.matrix(resolution) * camera.view_matrix() * pose.model_matrix()
}

/// Maps object-space vertices to screen space: MVP, perspective divide,
/// then the viewport transform. Output is index-aligned with `vertices`.
///
/// Vertices behind the eye are not clipped; they divide by a non-positive
/// `w` and land wherever that puts them.
pub fn project_vertices(
    vertices: &[Point3<f32>],
    pose: &Pose,
    camera: &Camera,
    projection: &Projection,
    resolution: Resolution,
) -> Vec<ScreenVertex> {
    let mvp = mvp_matrix(pose, camera, projection, resolution);
    let (width, height) = (resolution.width as f32, resolution.height as f32);

    vertices
        .iter()
        .map(|v| {
            let clip = mvp * v.to_homogeneous();
            let ndc = apply_perspective_division(&clip);
            ScreenVertex::new(ndc, ndc_to_screen(ndc.x, ndc.y, width, height))
        })
        .collect()
}
