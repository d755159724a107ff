use crate::core::data::complex::Complex;

pub const VIEWPORT_WIDTH: u32 = 400;
pub const VIEWPORT_HEIGHT: u32 = 400;

/// Shared by the escape-time cutoff and the colour normalisation.
pub const MAX_ITERATIONS: u32 = 64;

pub const ESCAPE_RADIUS: f64 = 2.0;

pub const SEED_CONSTANT: Complex = Complex {
    real: 0.28,
    imag: 0.01,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub constant: Complex,
}

impl Default for JuliaConfig {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            max_iterations: MAX_ITERATIONS,
            constant: SEED_CONSTANT,
        }
    }
}
