//! Input adapters for the Mandelbulb renderer.

#[cfg(feature = "gui")]
pub mod gui;
