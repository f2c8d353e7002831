use crate::core::color::Color;
use crate::io::config::{Config, ObjectConfig};
use crate::io::obj_loader::load_obj;
use crate::scene::camera::Camera;
use crate::scene::context::RenderContext;
use crate::scene::mesh::Mesh;
use crate::scene::scene_object::{Pose, SceneObject};
use crate::scene::texture::Texture;
use crate::scene::utils::normalize_and_center_mesh;
use log::{error, info, warn};
use nalgebra::{Point3, Vector3};
use std::sync::Arc;

/// Texture used when none is configured or the configured one fails to load.
pub fn fallback_texture() -> Texture {
    Texture::checkerboard(64, 8, Color::WHITE, Color::MAGENTA)
}

/// Builds the pose of one configured object. Rotation is read as degrees.
pub fn pose_from_config(obj_conf: &ObjectConfig) -> Pose {
    Pose::new(
        Vector3::from(obj_conf.position),
        obj_conf.rotation.to_radians(),
        Vector3::from(obj_conf.scale),
    )
}

/// Loads the mesh for one object, falling back to the built-in cube.
fn load_object_mesh(obj_conf: &ObjectConfig) -> Mesh {
    let Some(path) = &obj_conf.mesh else {
        return Mesh::cube(1.0);
    };

    match load_obj(path) {
        Ok(mut mesh) => {
            if obj_conf.normalize {
                let (center, scale) = normalize_and_center_mesh(&mut mesh);
                info!(
                    "Mesh '{}' normalized. Center: {:?}, Scale: {:.4}",
                    path, center, scale
                );
            }
            mesh
        }
        Err(e) => {
            error!("Error loading mesh '{}': {}. Using fallback cube.", path, e);
            Mesh::cube(1.0)
        }
    }
}

/// Builds scene objects in configuration order. Objects without a mesh
/// path share a single cube.
pub fn build_scene_objects(config: &Config) -> Vec<SceneObject> {
    let default_cube = Arc::new(Mesh::cube(1.0));

    config
        .objects
        .iter()
        .map(|obj_conf| {
            let mesh = if obj_conf.mesh.is_some() {
                Arc::new(load_object_mesh(obj_conf))
            } else {
                Arc::clone(&default_cube)
            };
            SceneObject::new(mesh, pose_from_config(obj_conf))
        })
        .collect()
}

/// Initial resource loading (Heavy I/O). Returns a RenderContext.
pub fn init_scene_resources(config: &Config) -> RenderContext {
    // 1. Camera
    let camera = Camera::new(
        Point3::from(config.camera.position),
        Point3::from(config.camera.target),
    );

    // 2. Texture
    let texture = match &config.texture {
        Some(path) => Texture::load(path).unwrap_or_else(|e| {
            warn!("{} ('{}'). Using checkerboard.", e, path);
            fallback_texture()
        }),
        None => fallback_texture(),
    };

    // 3. Objects
    let scene_objects = build_scene_objects(config);

    info!("Scene initialized with {} objects.", scene_objects.len());

    RenderContext {
        camera,
        texture,
        scene_objects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_config_builds_cube_grid() {
        let ctx = init_scene_resources(&Config::default());
        assert_eq!(ctx.scene_objects.len(), 4);
        assert_eq!(ctx.camera.position, Point3::new(0.0, 0.0, -3.0));
        assert_eq!(ctx.texture.width, 64);

        for obj in &ctx.scene_objects {
            assert_eq!(obj.mesh.triangle_count(), 12);
            assert!(Arc::ptr_eq(&obj.mesh, &ctx.scene_objects[0].mesh));
        }
        assert_eq!(ctx.scene_objects[3].pose.position, Vector3::new(3.0, 0.0, 3.0));
    }

    #[test]
    fn rotation_is_converted_to_radians() {
        let conf = ObjectConfig {
            rotation: 90.0,
            scale: [2.0, 2.0, 2.0],
            ..ObjectConfig::default()
        };
        let pose = pose_from_config(&conf);
        assert_relative_eq!(pose.rotation, std::f32::consts::FRAC_PI_2);
        assert_eq!(pose.scale, Vector3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn missing_assets_fall_back() {
        let config = Config::parse(
            r#"
            texture = "no/such/texture.png"

            [[objects]]
            mesh = "no/such/mesh.obj"
            "#,
        )
        .unwrap();

        let ctx = init_scene_resources(&config);
        assert_eq!(ctx.texture.width, fallback_texture().width);
        assert_eq!(ctx.scene_objects.len(), 1);
        assert_eq!(ctx.scene_objects[0].mesh.triangle_count(), 12);
    }
}
