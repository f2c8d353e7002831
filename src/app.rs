use crate::core::color::Color;
use crate::core::rasterizer::CullMode;
use crate::io::config::Config;
use crate::io::image::save_buffer_to_image;
use crate::pipeline::passes::{post_process_to_buffer, render_main_pass};
use crate::pipeline::renderer::Renderer;
use crate::pipeline::transform::Projection;
use crate::scene::context::RenderContext;
use crate::scene::loader::init_scene_resources;
use log::{info, warn};
use std::fs;
use std::path::Path;
use std::time::Instant;

pub fn parse_cull_mode(name: &str) -> CullMode {
    match name {
        "back" => CullMode::Back,
        "front" => CullMode::Front,
        "none" => CullMode::None,
        other => {
            warn!("Unknown cull mode '{}'. Using 'back'.", other);
            CullMode::Back
        }
    }
}

/// Builds a renderer configured from the `[render]` section.
pub fn renderer_from_config(config: &Config) -> Renderer {
    let mut renderer = Renderer::new(config.render.width, config.render.height);
    renderer
        .rasterizer
        .set_cull_mode(parse_cull_mode(&config.render.cull_mode));
    renderer.projection = Projection {
        fov_y_rad: config.render.fov.to_radians(),
        near: config.render.near,
        far: config.render.far,
    };
    renderer
}

/// Path of frame `index` inside a numbered sequence.
pub fn frame_path(output_dir: &str, index: usize) -> String {
    Path::new(output_dir)
        .join(format!("frame_{:03}.png", index))
        .to_string_lossy()
        .into_owned()
}

fn render_to_file(
    config: &Config,
    context: &RenderContext,
    renderer: &mut Renderer,
    buffer: &mut [u32],
    path: &str,
) -> Result<(), String> {
    let clear_color = Color::from(config.render.clear_color);
    render_main_pass(context, renderer, clear_color, config.render.sort_objects);
    post_process_to_buffer(&renderer.framebuffer, buffer);
    save_buffer_to_image(buffer, config.render.width, config.render.height, path)
}

/// Renders the configured scene headlessly and writes the image(s) to disk.
///
/// One frame goes to `render.output`. More than one frame goes to
/// `animation.output_dir`, with every object's yaw advanced between frames.
pub fn run_cli(config: Config) -> Result<(), String> {
    info!("Starting CLI mode...");
    let mut context = init_scene_resources(&config);
    let start_time = Instant::now();

    let mut renderer = renderer_from_config(&config);
    let mut buffer = vec![0u32; config.render.width * config.render.height];

    let frames = config.animation.frames.max(1);
    if frames == 1 {
        info!("Saving output to '{}'...", config.render.output);
        render_to_file(
            &config,
            &context,
            &mut renderer,
            &mut buffer,
            &config.render.output,
        )?;
    } else {
        let output_dir = &config.animation.output_dir;
        fs::create_dir_all(output_dir)
            .map_err(|e| format!("Failed to create output directory '{}': {}", output_dir, e))?;

        let spin = config.animation.spin_degrees.to_radians();
        info!(
            "Rendering {} frames to '{}' ({:.1} degrees per frame)...",
            frames, output_dir, config.animation.spin_degrees
        );
        for index in 0..frames {
            let path = frame_path(output_dir, index);
            render_to_file(&config, &context, &mut renderer, &mut buffer, &path)?;
            context.spin_objects(spin);
        }
    }

    info!("Render completed in {:.2?}", start_time.elapsed());
    info!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cull_mode_names() {
        assert_eq!(parse_cull_mode("back"), CullMode::Back);
        assert_eq!(parse_cull_mode("front"), CullMode::Front);
        assert_eq!(parse_cull_mode("none"), CullMode::None);
        assert_eq!(parse_cull_mode("sideways"), CullMode::Back);
    }

    #[test]
    fn renderer_uses_config_projection() {
        let config = Config::parse("[render]\nwidth = 32\nheight = 16\nfov = 60.0\ncull_mode = \"none\"")
            .unwrap();
        let renderer = renderer_from_config(&config);
        assert_eq!(renderer.framebuffer.width, 32);
        assert_eq!(renderer.framebuffer.height, 16);
        assert_eq!(renderer.rasterizer.cull_mode, CullMode::None);
        assert!((renderer.projection.fov_y_rad - 60f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn frames_are_zero_padded() {
        assert!(frame_path("out", 7).ends_with("frame_007.png"));
        assert!(frame_path("out", 123).ends_with("frame_123.png"));
    }

    #[test]
    fn sequence_writes_one_file_per_frame() {
        let dir = std::env::temp_dir().join("softraster_sequence_test");
        let _ = fs::remove_dir_all(&dir);

        let mut config = Config::parse("[render]\nwidth = 24\nheight = 16").unwrap();
        config.animation.frames = 3;
        config.animation.spin_degrees = 15.0;
        config.animation.output_dir = dir.to_string_lossy().into_owned();

        run_cli(config).unwrap();
        for index in 0..3 {
            assert!(dir.join(format!("frame_{:03}.png", index)).exists());
        }
        let _ = fs::remove_dir_all(&dir);
    }
}
