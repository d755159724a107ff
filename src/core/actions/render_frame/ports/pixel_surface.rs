use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;

/// Destination for rendered pixels.
///
/// The renderer only writes coordinates inside its viewport, so a failure here
/// means the surface and the viewport disagree about the frame size.
pub trait PixelSurface {
    type Failure: Error;

    fn write_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure>;
}
