use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel ({x}, {y}) is outside the {}x{} image",
        .pixel_rect.width(),
        .pixel_rect.height()
    )]
    PixelOutsideBounds { x: u32, y: u32, pixel_rect: PixelRect },
    #[error("{}x{} RGB image does not fit in memory", .pixel_rect.width(), .pixel_rect.height())]
    TooLarge { pixel_rect: PixelRect },
}

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> Result<usize, PixelBufferError> {
    usize::try_from(pixel_rect.size())
        .ok()
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or(PixelBufferError::TooLarge { pixel_rect })
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB image, three bytes per pixel.
#[derive(Debug)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Image of `pixel_rect`'s size with every pixel set to `colour`.
    pub fn filled(pixel_rect: PixelRect, colour: Colour) -> Result<Self, PixelBufferError> {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect)?;
        let mut buffer = Vec::with_capacity(total_bytes);

        for _ in 0..total_bytes / 3 {
            buffer.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.byte_offset(x, y)?;

        self.buffer[index..index + 3].copy_from_slice(&[colour.r, colour.g, colour.b]);
        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, PixelBufferError> {
        let index = self.byte_offset(x, y)?;

        Ok(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    fn byte_offset(&self, x: u32, y: u32) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains(x, y) {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                pixel_rect: self.pixel_rect,
            });
        }

        Ok((y as usize * self.pixel_rect.width() as usize + x as usize) * 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Colour = Colour::new(51, 51, 76);

    #[test]
    fn test_filled_repeats_colour_for_every_pixel() {
        let pixel_rect = PixelRect::from_size(4, 3).unwrap();

        let buffer = PixelBuffer::filled(pixel_rect, GREY).unwrap();

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer_size(), 4 * 3 * 3);
        assert!(buffer.buffer().chunks_exact(3).all(|px| px == [51, 51, 76]));
    }

    #[test]
    fn test_set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::filled(PixelRect::from_size(4, 3).unwrap(), GREY).unwrap();
        let red = Colour::new(255, 0, 0);

        buffer.set_pixel(1, 2, red).unwrap();

        // row 2, column 1 of a 4-wide image
        assert_eq!(&buffer.buffer()[27..30], &[255, 0, 0]);
        assert_eq!(buffer.pixel(1, 2), Ok(red));
        assert_eq!(buffer.pixel(2, 1), Ok(GREY));
    }

    #[test]
    fn test_last_pixel_is_addressable() {
        let mut buffer = PixelBuffer::filled(PixelRect::from_size(4, 3).unwrap(), GREY).unwrap();
        let white = Colour::new(255, 255, 255);

        buffer.set_pixel(3, 2, white).unwrap();

        assert_eq!(&buffer.buffer()[33..], &[255, 255, 255]);
    }

    #[test]
    fn test_pixels_outside_image_are_rejected() {
        let pixel_rect = PixelRect::from_size(4, 3).unwrap();
        let mut buffer = PixelBuffer::filled(pixel_rect, GREY).unwrap();

        assert_eq!(
            buffer.set_pixel(4, 0, GREY),
            Err(PixelBufferError::PixelOutsideBounds { x: 4, y: 0, pixel_rect })
        );
        assert_eq!(
            buffer.pixel(0, 3),
            Err(PixelBufferError::PixelOutsideBounds { x: 0, y: 3, pixel_rect })
        );
    }

    #[test]
    fn test_buffer_size_of_largest_image_does_not_overflow() {
        use crate::core::data::pixel_rect::MAX_SIDE;

        let pixel_rect = PixelRect::from_size(MAX_SIDE, MAX_SIDE).unwrap();

        assert_eq!(
            pixel_rect_to_buffer_size(pixel_rect),
            Ok(MAX_SIDE as usize * MAX_SIDE as usize * 3)
        );
    }
}
