pub mod rasterize_scene;
