use crate::core::actions::render_frame::ports::pixel_surface::PixelSurface;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn viewport_to_buffer_size(viewport: Viewport) -> usize {
    viewport.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, viewport: Viewport },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, viewport } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of viewport bounds {}x{}",
                    pixel.x,
                    pixel.y,
                    viewport.width(),
                    viewport.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB framebuffer, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    viewport: Viewport,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            buffer: vec![0; viewport_to_buffer_size(viewport)],
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> usize {
        (pixel.y as usize * self.viewport.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.viewport.contains(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                viewport: self.viewport,
            });
        }

        let index = self.index_of(pixel);

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.viewport.contains(pixel) {
            return None;
        }

        let index = self.index_of(pixel);

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

impl PixelSurface for PixelBuffer {
    type Failure = PixelBufferError;

    fn write_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure> {
        self.set_pixel(pixel, colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let viewport = create_viewport(10, 10);
        let buffer = PixelBuffer::new(viewport);

        assert_eq!(buffer.viewport(), viewport);
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_calculates_correct_buffer_size() {
        let buffer = PixelBuffer::new(create_viewport(100, 50));

        assert_eq!(buffer.buffer_size(), 15000); // 100 * 50 * 3
    }

    #[test]
    fn test_set_pixel_valid() {
        let mut buffer = PixelBuffer::new(create_viewport(3, 3));
        let red = Colour { r: 255, g: 0, b: 0 };
        let result = buffer.set_pixel(Point { x: 1, y: 1 }, red);

        assert!(result.is_ok());
        assert_eq!(buffer.buffer()[12], 255);
        assert_eq!(buffer.buffer()[13], 0);
        assert_eq!(buffer.buffer()[14], 0);
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut buffer = PixelBuffer::new(create_viewport(3, 3));
        let blue = Colour { r: 0, g: 0, b: 255 };
        let result = buffer.set_pixel(Point { x: 2, y: 2 }, blue);

        assert!(result.is_ok());
        assert_eq!(buffer.buffer()[24], 0);
        assert_eq!(buffer.buffer()[25], 0);
        assert_eq!(buffer.buffer()[26], 255);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let viewport = create_viewport(3, 3);
        let mut buffer = PixelBuffer::new(viewport);
        let colour = Colour { r: 255, g: 0, b: 0 };

        assert_eq!(
            buffer.set_pixel(Point { x: 3, y: 1 }, colour),
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 1 },
                viewport
            })
        );
        assert_eq!(
            buffer.set_pixel(Point { x: 1, y: 5 }, colour),
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 1, y: 5 },
                viewport
            })
        );
    }

    #[test]
    fn test_pixel_reads_back_written_colour() {
        let mut buffer = PixelBuffer::new(create_viewport(2, 2));
        let yellow = Colour {
            r: 255,
            g: 255,
            b: 0,
        };

        buffer.write_pixel(Point { x: 1, y: 0 }, yellow).unwrap();

        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }), Some(yellow));
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }), None);
    }

    #[test]
    fn test_set_multiple_pixels() {
        let mut buffer = PixelBuffer::new(create_viewport(2, 2));

        buffer
            .set_pixel(Point { x: 0, y: 0 }, Colour { r: 255, g: 0, b: 0 })
            .unwrap();
        buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour { r: 0, g: 255, b: 0 })
            .unwrap();
        buffer
            .set_pixel(Point { x: 0, y: 1 }, Colour { r: 0, g: 0, b: 255 })
            .unwrap();
        buffer
            .set_pixel(Point { x: 1, y: 1 }, Colour::WHITE)
            .unwrap();

        let expected: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 255, // (1,1) white
        ];

        assert_eq!(buffer.buffer(), &expected);
    }

    #[test]
    fn test_error_display() {
        let err = PixelBufferError::PixelOutsideBounds {
            pixel: Point { x: 4, y: 1 },
            viewport: create_viewport(3, 3),
        };

        assert_eq!(
            err.to_string(),
            "pixel at x:4, y:1 outside of viewport bounds 3x3"
        );
    }
}
