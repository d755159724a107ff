mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::snapshot::SnapshotController;
pub use controllers::interactive::errors::InteractionError;
pub use controllers::interactive::{
    InteractionOutcome, InteractiveController, PointerEvent, PointerEventSource, StatusSink,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::ports::pixel_surface::PixelSurface;
pub use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_state::{InteractionMode, RenderState};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::julia::algorithm::escape_iterations;
pub use crate::core::fractals::julia::colour_map::{GrayscaleColourMap, iterations_to_colour};
pub use crate::core::fractals::julia::errors::{ColourMapError, ConfigError};
pub use crate::core::fractals::julia::julia_config::{
    ESCAPE_RADIUS, JuliaConfig, MAX_ITERATIONS, SEED_CONSTANT,
};
pub use crate::core::util::pixel_to_point::{pixel_to_point, point_to_pixel};
#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::status::label::StatusLabel;
pub use presenters::status::log_sink::LogStatusSink;
