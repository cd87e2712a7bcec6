pub mod colour;
pub mod cubic_grid;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point3;
