use crate::core::math::transform::TransformFactory;
use nalgebra::{Matrix4, Point3, Vector3};

/// World up used by every look-at. There is no roll control.
pub const WORLD_UP: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);

/// Eye position and look-at target.
///
/// Callers (input handling, animation) mutate it between frames; the
/// pipeline only reads it during a draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
}

impl Camera {
    pub fn new(position: Point3<f32>, target: Point3<f32>) -> Self {
        Self { position, target }
    }

    /// Look-at matrix from `position` towards `target` with [`WORLD_UP`].
    pub fn view_matrix(&self) -> Matrix4<f32> {
        TransformFactory::view(&self.position, &self.target, &WORLD_UP)
    }

    /// Moves eye and target together, keeping the view direction.
    pub fn translate(&mut self, offset: &Vector3<f32>) {
        self.position += *offset;
        self.target += *offset;
    }

    /// Unit vector from eye to target.
    pub fn forward(&self) -> Vector3<f32> {
        (self.target - self.position).normalize()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, -3.0), Point3::origin())
    }
}
