use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::errors::ColourMapError;

/// Scales an iteration count linearly onto a grey level.
///
/// Zero iterations is black and `max_iterations` is white, so bounded orbits
/// draw white. Counts above the limit clamp to white.
#[must_use]
pub fn iterations_to_colour(iterations: u32, max_iterations: u32) -> Colour {
    if max_iterations == 0 {
        return Colour::BLACK;
    }

    let percentage = iterations as f64 / max_iterations as f64;
    let intensity = (percentage * 255.0).round().clamp(0.0, 255.0) as u8;

    Colour::grey(intensity)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayscaleColourMap {
    max_iterations: u32,
}

impl ColourMap for GrayscaleColourMap {
    type Failure = ColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        Ok(iterations_to_colour(iterations, self.max_iterations))
    }

    fn display_name(&self) -> &str {
        "Grayscale"
    }
}

impl GrayscaleColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
