use crate::core::math::transform::TransformFactory;
use crate::scene::mesh::Mesh;
use nalgebra::{Matrix4, Point3, Vector3};
use std::sync::Arc;

/// Instance pose: position, yaw-only rotation and per-axis scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3<f32>,
    /// Rotation about +Y, in radians.
    pub rotation: f32,
    pub scale: Vector3<f32>,
}

impl Pose {
    pub fn new(position: Vector3<f32>, rotation: f32, scale: Vector3<f32>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn at(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// `translate * scale * rotate_y`. The order is fixed: rotation is applied
    /// to the vertex first, then the (possibly non-uniform) scale.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        TransformFactory::translation(&self.position)
            * TransformFactory::scaling_nonuniform(&self.scale)
            * TransformFactory::rotation_y(self.rotation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vector3::zeros(), 0.0, Vector3::new(1.0, 1.0, 1.0))
    }
}

/// Represents an instance of a mesh in the scene with its own pose.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub mesh: Arc<Mesh>,
    pub pose: Pose,
}

impl SceneObject {
    pub fn new(mesh: Arc<Mesh>, pose: Pose) -> Self {
        Self { mesh, pose }
    }

    /// World-space position of the instance origin.
    pub fn origin(&self) -> Point3<f32> {
        Point3::from(self.pose.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector4;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn scale_applies_after_rotation() {
        // Rotating +X onto -Z first means the z scale (not the x scale) stretches it.
        let pose = Pose::new(
            Vector3::new(10.0, 0.0, 0.0),
            FRAC_PI_2,
            Vector3::new(2.0, 1.0, 5.0),
        );
        let p = pose.model_matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(p, Vector4::new(10.0, 0.0, -5.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn default_pose_is_identity() {
        assert_relative_eq!(Pose::default().model_matrix(), Matrix4::<f32>::identity());
    }
}
