pub mod ports;
pub mod render_grid;
pub mod render_grid_parallel_rayon;
