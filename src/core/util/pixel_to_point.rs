use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Maps a pixel position onto the 2x2 square of the complex plane centred on
/// `pan`. Row 0 is the top edge (`imag = +1`), column 0 the left edge
/// (`real = -1`).
///
/// Fractional positions are accepted so pointer coordinates map without
/// truncation.
#[must_use]
pub fn pixel_to_point(x: f64, y: f64, viewport: Viewport, pan: Complex) -> Complex {
    let real = (x / viewport.width() as f64) * 2.0 - 1.0;
    let imag = 1.0 - (y / viewport.height() as f64) * 2.0;

    Complex { real, imag } + pan
}

/// Inverse of [`pixel_to_point`] for the same viewport and pan.
#[must_use]
pub fn point_to_pixel(point: Complex, viewport: Viewport, pan: Complex) -> (f64, f64) {
    let real = point.real - pan.real;
    let imag = point.imag - pan.imag;

    let x = (real + 1.0) / 2.0 * viewport.width() as f64;
    let y = (1.0 - imag) / 2.0 * viewport.height() as f64;

    (x, y)
}
