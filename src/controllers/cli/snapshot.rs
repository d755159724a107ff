use std::path::Path;

use crate::controllers::interactive::InteractiveController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::presenters::status::log_sink::LogStatusSink;

/// Renders the opening frame of an interactive session without a window.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: JuliaConfig) -> Result<(), Box<dyn std::error::Error>> {
        let viewport = Viewport::new(config.width, config.height)?;

        log::info!(
            "Rendering {}x{} Julia set, c = {}, max iterations {}",
            config.width,
            config.height,
            config.constant,
            config.max_iterations
        );

        let mut controller =
            InteractiveController::new(config, PixelBuffer::new(viewport), LogStatusSink::default())?;
        controller.update()?;

        self.buffer = Some(controller.surface().clone());

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use std::cell::RefCell;

    #[derive(Default)]
    struct StubFilePresenter {
        presented: RefCell<Vec<usize>>,
    }

    impl FilePresenterPort for StubFilePresenter {
        fn present(&self, buffer: &PixelBuffer, _: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented.borrow_mut().push(buffer.buffer_size());
            Ok(())
        }
    }

    #[test]
    fn test_write_before_generate_presents_nothing() {
        let controller = SnapshotController::new(StubFilePresenter::default());

        controller.write("unused.ppm").unwrap();

        assert!(controller.presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_full_frame() {
        let config = JuliaConfig {
            width: 20,
            height: 10,
            ..JuliaConfig::default()
        };
        let mut controller = SnapshotController::new(StubFilePresenter::default());

        controller.generate(config).unwrap();
        controller.write("unused.ppm").unwrap();

        assert_eq!(*controller.presenter.presented.borrow(), vec![20 * 10 * 3]);
    }

    #[test]
    fn test_generate_with_zero_constant_draws_white_centre() {
        let config = JuliaConfig {
            width: 10,
            height: 10,
            constant: Complex::ZERO,
            ..JuliaConfig::default()
        };
        let mut controller = SnapshotController::new(StubFilePresenter::default());

        controller.generate(config).unwrap();

        let buffer = controller.buffer().unwrap();
        assert_eq!(buffer.pixel(Point { x: 5, y: 5 }), Some(Colour::WHITE));
    }

    #[test]
    fn test_generate_rejects_zero_sized_viewport() {
        let config = JuliaConfig {
            height: 0,
            ..JuliaConfig::default()
        };
        let mut controller = SnapshotController::new(StubFilePresenter::default());

        assert!(controller.generate(config).is_err());
        assert!(controller.buffer().is_none());
    }
}
