use thiserror::Error;

/// Largest accepted image side, in pixels.
pub const MAX_SIDE: u32 = 16_384;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("image must be at least 2x2 pixels: {width}x{height}")]
    TooSmall { width: u32, height: u32 },
    #[error("image sides are limited to {MAX_SIDE} pixels: {width}x{height}")]
    TooLarge { width: u32, height: u32 },
}

/// Image area of `width` x `height` pixels, top-left pixel at (0, 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < 2 || height < 2 {
            return Err(PixelRectError::TooSmall { width, height });
        }

        if width > MAX_SIDE || height > MAX_SIDE {
            return Err(PixelRectError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Number of pixels.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
