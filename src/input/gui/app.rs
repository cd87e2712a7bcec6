//! Main GUI application loop.

use thiserror::Error;
use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

use crate::config::RenderSettings;
use crate::controllers::build_scene::build_scene;
use crate::core::actions::rasterize_scene::rasterize_scene::rasterize_scene;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::scene::camera::Camera;
use crate::core::scene::light::HemisphericLight;
use crate::core::scene::voxel_scene::VoxelScene;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Camera rotation per arrow key press, in radians.
const ORBIT_STEP: f64 = 0.05;
const ZOOM_STEP: f64 = 0.9;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("pixels error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize surface: {0}")]
    Resize(#[from] pixels::TextureError),
    #[error("invalid frame size: {0}")]
    FrameSize(#[from] PixelRectError),
    #[error("failed to rasterize scene: {0}")]
    Rasterize(#[from] PixelBufferError),
}

/// The static scene plus everything needed to draw it each frame.
struct App {
    presenter: PixelsPresenter,
    scene: VoxelScene,
    camera: Camera,
    light: HemisphericLight,
}

impl App {
    fn new(
        window: &'static Window,
        scene: VoxelScene,
        camera: Camera,
        light: HemisphericLight,
    ) -> Result<Self, GuiError> {
        Ok(Self {
            presenter: PixelsPresenter::new(window)?,
            scene,
            camera,
            light,
        })
    }

    /// Rasterizes the scene from the current camera into the window.
    fn render(&mut self) -> Result<(), GuiError> {
        // Skip rendering for degenerate sizes (e.g., minimized window)
        if self.presenter.width() < 2 || self.presenter.height() < 2 {
            return Ok(());
        }

        let pixel_rect = PixelRect::from_size(self.presenter.width(), self.presenter.height())?;
        let buffer = rasterize_scene(&self.scene, &self.camera, &self.light, pixel_rect)?;

        self.presenter.present(&buffer)?;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.presenter.resize(width, height)?;
        Ok(())
    }

    fn handle_key(&mut self, key: &Key) {
        match key {
            Key::Named(NamedKey::ArrowLeft) => self.camera.orbit(-ORBIT_STEP, 0.0),
            Key::Named(NamedKey::ArrowRight) => self.camera.orbit(ORBIT_STEP, 0.0),
            Key::Named(NamedKey::ArrowUp) => self.camera.orbit(0.0, ORBIT_STEP),
            Key::Named(NamedKey::ArrowDown) => self.camera.orbit(0.0, -ORBIT_STEP),
            Key::Character(c) if c.as_str() == "+" || c.as_str() == "=" => {
                self.camera.zoom(ZOOM_STEP)
            }
            Key::Character(c) if c.as_str() == "-" => self.camera.zoom(1.0 / ZOOM_STEP),
            _ => {}
        }
    }
}

/// Builds the scene once, then redraws it continuously until the window is
/// closed. Arrow keys orbit the camera, `+`/`-` zoom.
pub fn run_gui(settings: RenderSettings) -> Result<(), GuiError> {
    let scene = build_scene(&settings.params, settings.enumeration);

    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbulb")
            .with_inner_size(LogicalSize::new(
                settings.pixel_rect.width() as f64,
                settings.pixel_rect.height() as f64,
            ))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, scene, settings.camera, settings.light)?;
    info!(voxels = app.scene.len(), "Scene ready");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = app.render() {
                    error!("Render error: {e}");
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(e) = app.resize(size.width, size.height) {
                    error!("Resize error: {e}");
                    elwt.exit();
                }
            }
            WindowEvent::KeyboardInput { event: key_event, .. }
                if key_event.state == ElementState::Pressed =>
            {
                app.handle_key(&key_event.logical_key);
            }
            _ => {}
        },
        Event::AboutToWait => {
            window.request_redraw();
        }
        _ => {}
    })?;

    Ok(())
}
