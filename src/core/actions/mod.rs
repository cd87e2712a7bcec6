pub mod cancellation;
pub mod rasterize_scene;
pub mod render_grid;
