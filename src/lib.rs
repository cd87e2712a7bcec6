mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;
mod presenters;

pub use config::{ConfigError, RenderArgs, RenderSettings};
pub use controllers::build_scene::{Enumeration, build_scene};
pub use controllers::cli::render::{CliRenderController, RenderError};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::rasterize_scene::rasterize_scene::rasterize_scene;
pub use crate::core::actions::render_grid::ports::membership_test::MembershipTest;
pub use crate::core::actions::render_grid::ports::render_sink::RenderSink;
pub use crate::core::actions::render_grid::render_grid::render_grid;
pub use crate::core::actions::render_grid::render_grid_parallel_rayon::{
    render_grid_parallel_rayon, render_grid_parallel_rayon_cancelable,
};
pub use crate::core::data::cubic_grid::{CubicGrid, CubicGridError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point3::Point3;
pub use crate::core::fractals::mandelbulb::algorithm::{MandelbulbAlgorithm, is_bounded};
pub use crate::core::fractals::mandelbulb::errors::MandelbulbError;
pub use crate::core::fractals::mandelbulb::params::MandelbulbParams;
pub use crate::core::fractals::mandelbulb::render::{
    render_mandelbulb, render_mandelbulb_parallel, render_mandelbulb_parallel_cancelable,
};
pub use crate::core::scene::camera::Camera;
pub use crate::core::scene::light::HemisphericLight;
pub use crate::core::scene::voxel_scene::VoxelScene;
#[cfg(feature = "gui")]
pub use input::gui::{GuiError, run_gui};
pub use logging::init_logging;
pub use presenters::file::ppm::PpmFilePresenter;
