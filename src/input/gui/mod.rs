//! Windowed viewer: winit for window management, pixels for the framebuffer.

mod app;

pub use app::{GuiError, run_gui};
