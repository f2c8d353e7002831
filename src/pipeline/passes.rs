use crate::core::color::Color;
use crate::core::framebuffer::FrameBuffer;
use crate::pipeline::renderer::{DrawStats, Renderer};
use crate::scene::camera::Camera;
use crate::scene::context::RenderContext;
use crate::scene::scene_object::SceneObject;
use log::debug;

/// Executes the main pass: clear, then every object in submission order.
///
/// Later objects overwrite earlier ones. With `sort_objects` the list is
/// first ordered farthest-to-nearest from the camera so the nearest object
/// paints last.
pub fn render_main_pass(
    context: &RenderContext,
    renderer: &mut Renderer,
    clear_color: Color,
    sort_objects: bool,
) -> DrawStats {
    renderer.clear(clear_color);

    let mut order: Vec<&SceneObject> = context.scene_objects.iter().collect();
    if sort_objects {
        sort_back_to_front(&mut order, &context.camera);
    }

    let mut total = DrawStats::default();
    for obj in order {
        total += renderer.draw_object(obj, &context.camera, &context.texture);
    }

    debug!(
        "Main pass: {} objects, {} of {} triangles drawn, {} pixels",
        context.scene_objects.len(),
        total.drawn(),
        total.triangles,
        total.pixels_written
    );
    total
}

/// Orders objects by descending squared distance from the eye to their origin.
/// Ties keep submission order.
pub fn sort_back_to_front(objects: &mut [&SceneObject], camera: &Camera) {
    objects.sort_by(|a, b| {
        let da = (a.origin() - camera.position).norm_squared();
        let db = (b.origin() - camera.position).norm_squared();
        db.total_cmp(&da)
    });
}

/// Post-processing: FrameBuffer -> packed `0xAARRGGBB` buffer for output.
pub fn post_process_to_buffer(framebuffer: &FrameBuffer, buffer: &mut [u32]) {
    framebuffer.write_argb(buffer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::mesh::Mesh;
    use crate::scene::scene_object::Pose;
    use crate::scene::texture::Texture;
    use nalgebra::{Point3, Vector3};
    use std::sync::Arc;

    fn context(positions: &[[f32; 3]]) -> RenderContext {
        let mesh = Arc::new(Mesh::cube(1.0));
        RenderContext {
            camera: Camera::default(),
            texture: Texture::checkerboard(8, 2, Color::WHITE, Color::MAGENTA),
            scene_objects: positions
                .iter()
                .map(|&p| SceneObject::new(mesh.clone(), Pose::at(Vector3::from(p))))
                .collect(),
        }
    }

    #[test]
    fn sort_puts_farthest_first() {
        let ctx = context(&[[0.0, 0.0, 0.0], [0.0, 0.0, 6.0], [3.0, 0.0, 3.0]]);
        let mut order: Vec<&SceneObject> = ctx.scene_objects.iter().collect();
        sort_back_to_front(&mut order, &ctx.camera);

        let zs: Vec<f32> = order.iter().map(|o| o.pose.position.z).collect();
        assert_eq!(zs, vec![6.0, 3.0, 0.0]);
        assert_eq!(ctx.camera.position, Point3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn main_pass_clears_then_draws_all_objects() {
        let ctx = context(&[[0.0, 0.0, 0.0], [3.0, 0.0, 3.0]]);
        let mut renderer = Renderer::new(120, 80);
        renderer.clear(Color::WHITE);

        let stats = render_main_pass(&ctx, &mut renderer, Color::new(1, 2, 3), false);
        assert_eq!(stats.triangles, 24);
        assert!(stats.pixels_written > 0);
        assert_eq!(renderer.framebuffer.pixel(0, 0), Some(Color::new(1, 2, 3)));
    }
}
