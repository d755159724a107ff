use crate::controllers::interactive::errors::InteractionError;
use crate::controllers::interactive::ports::{PointerEventSource, StatusSink};
use crate::controllers::interactive::types::{InteractionOutcome, PointerEvent};
use crate::core::actions::render_frame::ports::pixel_surface::PixelSurface;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::complex::Complex;
use crate::core::data::render_state::{InteractionMode, RenderState};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::julia::colour_map::GrayscaleColourMap;
use crate::core::fractals::julia::errors::ConfigError;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::util::pixel_to_point::pixel_to_point;
use std::time::Instant;

pub struct InteractiveController<P: PixelSurface, S: StatusSink> {
    state: RenderState,
    viewport: Viewport,
    max_iterations: u32,
    colour_map: GrayscaleColourMap,
    surface: P,
    status: S,
}

impl<P: PixelSurface, S: StatusSink> InteractiveController<P, S> {
    pub fn new(config: JuliaConfig, surface: P, status: S) -> Result<Self, ConfigError> {
        let viewport = Viewport::new(config.width, config.height)?;

        if !config.constant.is_finite() {
            return Err(ConfigError::NonFiniteConstant(config.constant));
        }

        Ok(Self {
            state: RenderState::new(config.constant),
            viewport,
            max_iterations: config.max_iterations,
            colour_map: GrayscaleColourMap::new(config.max_iterations),
            surface,
            status,
        })
    }

    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.state.mode()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn surface(&self) -> &P {
        &self.surface
    }

    #[must_use]
    pub fn status(&self) -> &S {
        &self.status
    }

    /// Refreshes the status text then redraws the whole frame.
    pub fn update(&mut self) -> Result<(), InteractionError<P::Failure>> {
        self.status.set_text(&self.state.constant.to_string());

        let start = Instant::now();

        render_frame(
            &self.state,
            self.viewport,
            self.max_iterations,
            &self.colour_map,
            &mut self.surface,
        )?;

        log::info!(
            "Rendered {}x{} frame for c = {} in {:?}",
            self.viewport.width(),
            self.viewport.height(),
            self.state.constant,
            start.elapsed()
        );

        Ok(())
    }

    /// Until the first click the constant tracks the pointer, snapped to the
    /// nearest hundredth. Afterwards moves are ignored.
    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
    ) -> Result<InteractionOutcome, InteractionError<P::Failure>> {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("Dropping pointer move with non-finite position ({}, {})", x, y);
            return Ok(InteractionOutcome::Rejected);
        }

        if self.mode() == InteractionMode::Clicked {
            log::trace!("Ignoring pointer move at ({}, {}) after first click", x, y);
            return Ok(InteractionOutcome::Ignored);
        }

        let point = pixel_to_point(x, y, self.viewport, Complex::ZERO);
        self.state.constant = point.rounded_to_hundredths();

        log::debug!("Pointer at ({}, {}) set constant to {}", x, y, self.state.constant);

        self.update()?;

        Ok(InteractionOutcome::ConstantChanged)
    }

    /// The first click only freezes the constant. Every later click moves
    /// the clicked point to the centre of the view.
    pub fn click(
        &mut self,
        x: f64,
        y: f64,
    ) -> Result<InteractionOutcome, InteractionError<P::Failure>> {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("Dropping click with non-finite position ({}, {})", x, y);
            return Ok(InteractionOutcome::Rejected);
        }

        if !self.state.has_clicked_once {
            self.state.has_clicked_once = true;
            log::debug!("First click, constant frozen at {}", self.state.constant);
            return Ok(InteractionOutcome::Armed);
        }

        self.state.pan = pixel_to_point(x, y, self.viewport, self.state.pan);

        log::debug!(
            "Click at ({}, {}) panned view to {}",
            x,
            y,
            self.state.pan
        );

        self.update()?;

        Ok(InteractionOutcome::Panned)
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
    ) -> Result<InteractionOutcome, InteractionError<P::Failure>> {
        match event {
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Click { x, y } => self.click(x, y),
        }
    }

    /// Handles queued events in delivery order and reports whether any of
    /// them redrew the frame. Stops at the first render failure.
    pub fn drain<E: PointerEventSource>(
        &mut self,
        source: &mut E,
    ) -> Result<bool, InteractionError<P::Failure>> {
        let mut redrew = false;

        while let Some(event) = source.next_event() {
            redrew |= self.handle(event)?.redrew();
        }

        Ok(redrew)
    }
}
