use crate::scene::camera::Camera;
use crate::scene::scene_object::SceneObject;
use crate::scene::texture::Texture;

/// Holds all scene resources required for rendering a frame.
pub struct RenderContext {
    pub camera: Camera,
    pub texture: Texture,
    /// Draw order is submission order.
    pub scene_objects: Vec<SceneObject>,
}

impl RenderContext {
    /// Advances every object's yaw by `delta_rad`.
    pub fn spin_objects(&mut self, delta_rad: f32) {
        for obj in &mut self.scene_objects {
            obj.pose.rotation += delta_rad;
        }
    }
}
