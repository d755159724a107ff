use crate::controllers::interactive::errors::InteractionError;
use crate::controllers::interactive::{InteractiveController, PointerEvent};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::presenters::pixels::pixel_format::PixelFormatError;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::presenters::status::label::StatusLabel;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::collections::VecDeque;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

#[derive(Debug)]
pub enum GuiAppError {
    Interaction(InteractionError<PixelBufferError>),
    PixelFormat(PixelFormatError),
}

impl std::fmt::Display for GuiAppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interaction(err) => write!(f, "{}", err),
            Self::PixelFormat(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GuiAppError {}

impl From<InteractionError<PixelBufferError>> for GuiAppError {
    fn from(err: InteractionError<PixelBufferError>) -> Self {
        Self::Interaction(err)
    }
}

impl From<PixelFormatError> for GuiAppError {
    fn from(err: PixelFormatError) -> Self {
        Self::PixelFormat(err)
    }
}

/// Turns window events into pointer events for the controller and shows
/// its output.
///
/// Events are queued and drained right away, so every render finishes before
/// the next window event is looked at.
pub struct GuiApp {
    controller: InteractiveController<PixelBuffer, StatusLabel>,
    presenter: PixelsPresenter,
    pending: VecDeque<PointerEvent>,
    cursor: Option<(f64, f64)>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: PixelsPresenter,
        controller: InteractiveController<PixelBuffer, StatusLabel>,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            controller,
            presenter,
            pending: VecDeque::new(),
            cursor: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Draws the opening frame before any pointer input arrives.
    pub fn start(&mut self) -> Result<(), GuiAppError> {
        self.controller.update()?;
        self.presenter.present_frame(self.controller.surface())?;

        Ok(())
    }

    /// Returns true when egui asked for a repaint.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);

        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if !response.consumed => {
                if let Some((x, y)) = self.cursor {
                    self.pending.push_back(PointerEvent::Click { x, y });
                }
            }
            _ => {}
        }

        response.repaint
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = self.presenter.window_pos_to_surface(position);

        if let Some((x, y)) = self.cursor {
            self.pending.push_back(PointerEvent::Move { x, y });
        }
    }

    /// Feeds queued pointer events to the controller. Returns true when the
    /// frame changed and the window needs a redraw.
    pub fn process_pending(&mut self) -> Result<bool, GuiAppError> {
        if self.pending.is_empty() {
            return Ok(false);
        }

        let redrew = self.controller.drain(&mut self.pending)?;

        if redrew {
            self.presenter.present_frame(self.controller.surface())?;
        }

        Ok(redrew)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.presenter.resize_surface(width, height)
    }

    pub fn redraw(&mut self, window: &Window) -> Result<(), pixels::Error> {
        let raw_input = self.egui_state.take_egui_input(window);
        let status = self.controller.status().text().to_string();

        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Constant")
                .title_bar(false)
                .resizable(false)
                .default_pos([8.0, 8.0])
                .show(ctx, |ui| {
                    ui.label(status.as_str());
                });
        });

        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        self.presenter.render(egui_output, &self.egui_ctx)
    }
}
