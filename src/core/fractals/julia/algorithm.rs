use crate::core::data::complex::Complex;
use crate::core::fractals::julia::julia_config::ESCAPE_RADIUS;
use std::ops::ControlFlow;

const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Counts applications of `z -> z² + c` until `|z|` exceeds [`ESCAPE_RADIUS`].
///
/// The formula is applied before the first test, so a starting point that is
/// already outside the radius still reports at least one iteration. Orbits
/// that stay bounded report `max_iterations`; a limit of zero returns zero
/// without evaluating anything.
#[must_use]
pub fn escape_iterations(z0: Complex, c: Complex, max_iterations: u32) -> u32 {
    let iterations = (1..=max_iterations).try_fold(z0, |z, iteration| {
        let next = z * z + c;

        if next.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match iterations {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}
