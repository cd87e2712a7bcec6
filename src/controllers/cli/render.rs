use thiserror::Error;
use tracing::info;

use crate::config::RenderSettings;
use crate::controllers::build_scene::build_scene;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::rasterize_scene::rasterize_scene::rasterize_scene;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::scene::voxel_scene::VoxelScene;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to rasterize scene: {0}")]
    Rasterize(#[from] PixelBufferError),
}

/// One-shot render: build the scene, rasterize it, hand the image to a file
/// presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    settings: RenderSettings,
    scene: Option<VoxelScene>,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, settings: RenderSettings) -> Self {
        Self {
            presenter,
            settings,
            scene: None,
            buffer: None,
        }
    }

    /// Builds and rasterizes the scene, returning the accepted point count.
    pub fn generate(&mut self) -> Result<u64, RenderError> {
        let scene = build_scene(&self.settings.params, self.settings.enumeration);
        let accepted = scene.len() as u64;

        info!(
            width = self.settings.pixel_rect.width(),
            height = self.settings.pixel_rect.height(),
            "Rasterizing {} unit boxes",
            accepted
        );

        self.buffer = Some(rasterize_scene(
            &scene,
            &self.settings.camera,
            &self.settings.light,
            self.settings.pixel_rect,
        )?);
        self.scene = Some(scene);

        Ok(accepted)
    }

    pub fn scene(&self) -> Option<&VoxelScene> {
        self.scene.as_ref()
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated image to the configured output path. Does
    /// nothing before [`CliRenderController::generate`] has run.
    pub fn write(&self) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &self.settings.output)?;
            info!(path = %self.settings.output.display(), "Saved image");
        }

        Ok(())
    }
}
