use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::pixel_surface::PixelSurface;
use crate::core::data::render_state::RenderState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::julia::algorithm::escape_iterations;
use crate::core::util::pixel_to_point::pixel_to_point;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderFrameError<C, S> {
    ColourMap(C),
    Surface(S),
}

impl<C: fmt::Display, S: fmt::Display> fmt::Display for RenderFrameError<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::Surface(err) => write!(f, "pixel surface error: {}", err),
        }
    }
}

impl<C, S> Error for RenderFrameError<C, S>
where
    C: Error + 'static,
    S: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

/// Redraws every pixel of `viewport` onto `surface` for the given state.
///
/// Pixels are visited row by row from the top-left corner. The frame is
/// always drawn in full; there is no partial redraw.
pub fn render_frame<CMap, P>(
    state: &RenderState,
    viewport: Viewport,
    max_iterations: u32,
    colour_map: &CMap,
    surface: &mut P,
) -> Result<(), RenderFrameError<CMap::Failure, P::Failure>>
where
    CMap: ColourMap,
    P: PixelSurface,
{
    for pixel in viewport.pixels() {
        let point = pixel_to_point(pixel.x as f64, pixel.y as f64, viewport, state.pan);
        let iterations = escape_iterations(point, state.constant, max_iterations);
        let colour = colour_map
            .map(iterations)
            .map_err(RenderFrameError::ColourMap)?;

        surface
            .write_pixel(pixel, colour)
            .map_err(RenderFrameError::Surface)?;
    }

    Ok(())
}
