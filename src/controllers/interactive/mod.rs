//! Interactive controller for pointer-driven Julia set exploration.
//!
//! The controller owns the [`RenderState`] and is the only place it changes.
//! Pointer events come in through [`PointerEventSource`] or the direct event
//! methods, and every accepted change redraws the whole frame on the
//! [`PixelSurface`] and refreshes the [`StatusSink`].
//!
//! [`RenderState`]: crate::core::data::render_state::RenderState
//! [`PixelSurface`]: crate::core::actions::render_frame::ports::pixel_surface::PixelSurface

mod controller;
pub mod errors;
pub mod ports;
mod types;

pub use controller::InteractiveController;
pub use ports::{PointerEventSource, StatusSink};
pub use types::{InteractionOutcome, PointerEvent};
