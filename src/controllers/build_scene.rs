use std::time::Instant;

use tracing::info;

use crate::core::fractals::mandelbulb::params::MandelbulbParams;
use crate::core::fractals::mandelbulb::render::{render_mandelbulb, render_mandelbulb_parallel};
use crate::core::scene::voxel_scene::VoxelScene;

/// How the lattice is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enumeration {
    Serial,
    #[default]
    Parallel,
}

/// Runs one render pass of the Mandelbulb into a fresh [`VoxelScene`].
pub fn build_scene(params: &MandelbulbParams, enumeration: Enumeration) -> VoxelScene {
    info!(
        grid_size = params.grid_size(),
        iterations = params.iteration_count(),
        power = params.power(),
        threshold = params.divergence_threshold(),
        ?enumeration,
        "Rendering {}",
        params.display_name()
    );

    let mut scene = VoxelScene::new();
    let start = Instant::now();

    let accepted = match enumeration {
        Enumeration::Serial => render_mandelbulb(params, &mut scene),
        Enumeration::Parallel => render_mandelbulb_parallel(params, &mut scene),
    };

    info!(
        accepted,
        candidates = params.grid().len(),
        duration = ?start.elapsed(),
        "Lattice enumerated"
    );

    scene
}
