use crate::core::actions::render_frame::render_frame::RenderFrameError;
use crate::core::fractals::julia::errors::ColourMapError;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum InteractionError<E> {
    Render(RenderFrameError<ColourMapError, E>),
}

impl<E: fmt::Display> fmt::Display for InteractionError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for InteractionError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
        }
    }
}

impl<E> From<RenderFrameError<ColourMapError, E>> for InteractionError<E> {
    fn from(err: RenderFrameError<ColourMapError, E>) -> Self {
        Self::Render(err)
    }
}
