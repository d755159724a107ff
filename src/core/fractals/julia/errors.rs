use crate::core::data::complex::Complex;
use crate::core::data::viewport::ViewportError;
use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum ColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for ColourMapError {}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Viewport(ViewportError),
    NonFiniteConstant(Complex),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::NonFiniteConstant(constant) => {
                write!(
                    f,
                    "constant must be finite: ({}, {})",
                    constant.real, constant.imag
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::NonFiniteConstant(_) => None,
        }
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_map_error_display() {
        let err = ColourMapError::IterationsExceedMax {
            iterations: 65,
            max_iterations: 64,
        };

        assert_eq!(err.to_string(), "iterations 65 exceeds maximum 64");
    }

    #[test]
    fn test_config_error_wraps_viewport_error() {
        let err: ConfigError = ViewportError::ZeroSized {
            width: 0,
            height: 400,
        }
        .into();

        assert_eq!(
            err.to_string(),
            "invalid viewport: viewport size must be non-zero: 0x400"
        );
        assert!(err.source().is_some());
    }
}
