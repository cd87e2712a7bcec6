pub mod build_scene;
pub mod cli;
pub mod ports;
