use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Shows [`PixelBuffer`] frames in a window through a `pixels` surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn present(&mut self, buffer: &PixelBuffer) -> Result<(), pixels::Error> {
        copy_rgb_into_rgba(buffer.buffer(), self.pixels.frame_mut());
        self.pixels.render()
    }

    /// Resizes surface and framebuffer. Zero sizes (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.width = width;
        self.height = height;

        Ok(())
    }
}

pub(crate) fn copy_rgb_into_rgba(src: &[u8], dest: &mut [u8]) {
    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[1];
        dst_pixel[2] = src_pixel[2];
        dst_pixel[3] = 255;
    }
}
