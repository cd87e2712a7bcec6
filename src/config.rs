use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::controllers::build_scene::Enumeration;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point3::Point3;
use crate::core::fractals::mandelbulb::errors::MandelbulbError;
use crate::core::fractals::mandelbulb::params::{
    DEFAULT_DIVERGENCE_THRESHOLD, DEFAULT_GRID_SIZE, DEFAULT_ITERATION_COUNT, DEFAULT_POWER,
    MandelbulbParams,
};
use crate::core::scene::camera::Camera;
use crate::core::scene::light::HemisphericLight;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_OUTPUT: &str = "output/mandelbulb.ppm";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid fractal parameters: {0}")]
    Params(#[from] MandelbulbError),
    #[error("invalid image size: {0}")]
    ImageSize(#[from] PixelRectError),
    #[error("camera position needs exactly 3 coordinates, got {count}")]
    CameraPosition { count: usize },
}

#[derive(Debug, Clone, Parser)]
#[command(name = "mandelbulb_voxels")]
#[command(about = "Voxel-sampled Mandelbulb renderer", long_about = None)]
pub struct RenderArgs {
    /// Edge length of the cubic sampling grid centered on the origin
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Escape-test iterations per lattice point
    #[arg(long, default_value_t = DEFAULT_ITERATION_COUNT)]
    pub iterations: u32,

    /// Exponent of the spherical power map
    #[arg(long, default_value_t = DEFAULT_POWER)]
    pub power: f64,

    /// Orbit magnitude above which a point is treated as divergent
    #[arg(long, default_value_t = DEFAULT_DIVERGENCE_THRESHOLD)]
    pub threshold: f64,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Camera position as x,y,z; the camera always looks at the origin
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = vec![-100.0, -100.0, -100.0]
    )]
    pub camera_position: Vec<f64>,

    /// Where the CLI writes the rendered PPM image
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Test lattice points on the calling thread only
    #[arg(long)]
    pub serial: bool,
}

/// Validated settings for one render pass.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub params: MandelbulbParams,
    pub camera: Camera,
    pub light: HemisphericLight,
    pub pixel_rect: PixelRect,
    pub enumeration: Enumeration,
    pub output: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            params: MandelbulbParams::default(),
            camera: Camera::default(),
            light: HemisphericLight::default(),
            pixel_rect: PixelRect::from_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
                .expect("default image size is valid"),
            enumeration: Enumeration::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RenderArgs {
    pub fn into_settings(self) -> Result<RenderSettings, ConfigError> {
        let params =
            MandelbulbParams::new(self.grid_size, self.iterations, self.power, self.threshold)?;

        let [x, y, z] = self.camera_position[..] else {
            return Err(ConfigError::CameraPosition {
                count: self.camera_position.len(),
            });
        };

        let pixel_rect = PixelRect::from_size(self.width, self.height)?;
        let enumeration = if self.serial {
            Enumeration::Serial
        } else {
            Enumeration::Parallel
        };

        Ok(RenderSettings {
            params,
            camera: Camera::new(Point3::new(x, y, z), Point3::ZERO),
            light: HemisphericLight::default(),
            pixel_rect,
            enumeration,
            output: self.output,
        })
    }
}
