use clap::Parser;
use log::info;
use softraster::app::run_cli;
use softraster::io::config::Config;

/// Textured software rasterizer
#[derive(Parser, Debug)]
#[command(name = "softraster")]
#[command(about = "Renders a TOML-described scene of textured meshes to PNG")]
struct Cli {
    /// Scene configuration file (TOML). Without it the default cube grid is rendered.
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Output image for a single-frame render
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Number of frames; more than one writes a numbered sequence
    #[arg(long)]
    frames: Option<usize>,

    /// Yaw added to every object per frame, in degrees
    #[arg(long, value_name = "DEG")]
    spin: Option<f32>,
}

impl Cli {
    fn load_config(&self) -> Result<Config, String> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading config: {}", path);
                Config::load(path)?
            }
            None => {
                info!("No config given. Using default scene.");
                Config::default()
            }
        };

        if let Some(output) = &self.output {
            config.render.output = output.clone();
        }
        if let Some(width) = self.width {
            config.render.width = width;
        }
        if let Some(height) = self.height {
            config.render.height = height;
        }
        if let Some(frames) = self.frames {
            config.animation.frames = frames;
        }
        if let Some(spin) = self.spin {
            config.animation.spin_degrees = spin;
        }

        if config.render.width == 0 || config.render.height == 0 {
            return Err("Width and height must be non-zero".to_string());
        }
        Ok(config)
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    run_cli(config)
}
