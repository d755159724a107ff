use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportError {
    ZeroSized { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSized { width, height } => {
                write!(f, "viewport size must be non-zero: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// Fixed pixel dimensions of the drawing surface.
///
/// Always covers a 2x2 square of the complex plane, so a non-square viewport
/// stretches the image rather than revealing more of the plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::ZeroSized { width, height });
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
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Iterates every pixel once, row by row from the top-left corner.
    pub fn pixels(self) -> impl Iterator<Item = Point> {
        let width = self.width;

        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(400, 300).unwrap();

        assert_eq!(viewport.width(), 400);
        assert_eq!(viewport.height(), 300);
        assert_eq!(viewport.size(), 120_000);
    }

    #[test]
    fn test_viewport_rejects_zero_dimensions() {
        assert_eq!(
            Viewport::new(0, 10),
            Err(ViewportError::ZeroSized { width: 0, height: 10 })
        );
        assert_eq!(
            Viewport::new(10, 0),
            Err(ViewportError::ZeroSized { width: 10, height: 0 })
        );
        assert!(Viewport::new(1, 1).is_ok());
    }

    #[test]
    fn test_viewport_contains() {
        let viewport = Viewport::new(10, 5).unwrap();

        assert!(viewport.contains(Point { x: 0, y: 0 }));
        assert!(viewport.contains(Point { x: 9, y: 4 }));
        assert!(!viewport.contains(Point { x: 10, y: 4 }));
        assert!(!viewport.contains(Point { x: 9, y: 5 }));
    }

    #[test]
    fn test_pixels_are_row_major_and_cover_viewport_once() {
        let viewport = Viewport::new(3, 2).unwrap();
        let pixels: Vec<Point> = viewport.pixels().collect();

        assert_eq!(
            pixels,
            vec![
                Point { x: 0, y: 0 },
                Point { x: 1, y: 0 },
                Point { x: 2, y: 0 },
                Point { x: 0, y: 1 },
                Point { x: 1, y: 1 },
                Point { x: 2, y: 1 },
            ]
        );
    }
}
