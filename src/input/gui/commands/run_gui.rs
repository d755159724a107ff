use crate::controllers::interactive::InteractiveController;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::presenters::status::label::StatusLabel;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

pub struct RunGuiCommand {
    config: JuliaConfig,
}

impl RunGuiCommand {
    pub fn new(config: JuliaConfig) -> Self {
        Self { config }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let viewport = Viewport::new(self.config.width, self.config.height)?;
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Julia Explorer")
                .with_inner_size(LogicalSize::new(
                    viewport.width() as f64,
                    viewport.height() as f64,
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, viewport)?;
        let controller = InteractiveController::new(
            self.config,
            PixelBuffer::new(viewport),
            StatusLabel::default(),
        )?;

        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        app.start()?;

        let mut redraw_pending = true;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if app.handle_window_event(window, event) {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        if let Err(e) = app.redraw(window) {
                            log::error!("Render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = app.resize(size.width, size.height) {
                            log::error!("Resize error: {e}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ => {}
                }

                match app.process_pending() {
                    Ok(true) => redraw_pending = true,
                    Ok(false) => {}
                    Err(e) => {
                        log::error!("Interaction error: {e}");
                        elwt.exit();
                    }
                }
            }
            Event::AboutToWait => {
                // Only request redraw if state changed
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
