use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Image file decoded into the shared texture. `None` uses a checkerboard.
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default = "default_objects")]
    pub objects: Vec<ObjectConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            texture: None,
            render: RenderConfig::default(),
            camera: CameraConfig::default(),
            animation: AnimationConfig::default(),
            objects: default_objects(),
        }
    }
}

/// A 2x2 grid of cubes spaced 3 units apart on the XZ plane.
fn default_objects() -> Vec<ObjectConfig> {
    let mut objects = Vec::new();
    for z in 0..2 {
        for x in 0..2 {
            objects.push(ObjectConfig {
                position: [x as f32 * 3.0, 0.0, z as f32 * 3.0],
                ..ObjectConfig::default()
            });
        }
    }
    objects
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    // --- Output ---
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub clear_color: [u8; 3],

    // --- Projection ---
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,

    // --- Pipeline ---
    #[serde(default = "default_cull_mode")]
    pub cull_mode: String, // "back", "front", "none"
    #[serde(default)]
    pub sort_objects: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            output: default_output(),
            clear_color: [0, 0, 0],
            fov: default_fov(),
            near: default_near(),
            far: default_far(),
            cull_mode: default_cull_mode(),
            sort_objects: false,
        }
    }
}

fn default_width() -> usize {
    240
}
fn default_height() -> usize {
    160
}
fn default_output() -> String {
    "output.png".to_string()
}
fn default_fov() -> f32 {
    90.0
}
fn default_near() -> f32 {
    0.1
}
fn default_far() -> f32 {
    100.0
}
fn default_cull_mode() -> String {
    "back".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_camera_position")]
    pub position: [f32; 3],
    #[serde(default)]
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: default_camera_position(),
            target: [0.0, 0.0, 0.0],
        }
    }
}

fn default_camera_position() -> [f32; 3] {
    [0.0, 0.0, -3.0]
}

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    /// Number of frames to render. More than one writes a numbered sequence.
    #[serde(default = "default_frames")]
    pub frames: usize,
    /// Yaw added to every object between frames, in degrees.
    #[serde(default)]
    pub spin_degrees: f32,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            spin_degrees: 0.0,
            output_dir: default_output_dir(),
        }
    }
}

fn default_frames() -> usize {
    1
}
fn default_output_dir() -> String {
    "frames".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ObjectConfig {
    /// OBJ file. `None` uses the built-in cube.
    #[serde(default)]
    pub mesh: Option<String>,
    /// Center and fit a loaded OBJ into [-1, 1].
    #[serde(default)]
    pub normalize: bool,

    // --- Pose ---
    #[serde(default)]
    pub position: [f32; 3],
    /// Yaw in degrees.
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            mesh: None,
            normalize: false,
            position: [0.0, 0.0, 0.0],
            rotation: 0.0,
            scale: default_scale(),
        }
    }
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Config =
            toml::from_str(content).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.render.width == 0 || self.render.height == 0 {
            return Err(format!(
                "Render resolution must be non-zero, got {}x{}",
                self.render.width, self.render.height
            ));
        }
        if !(self.render.fov > 0.0 && self.render.fov < 180.0) {
            return Err(format!("FOV must be in (0, 180) degrees, got {}", self.render.fov));
        }
        if !(self.render.near > 0.0 && self.render.near < self.render.far) {
            return Err(format!(
                "Clip planes must satisfy 0 < near < far, got near={} far={}",
                self.render.near, self.render.far
            ));
        }
        Ok(())
    }
}
