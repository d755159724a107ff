use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        let width = buffer.viewport().width();
        let height = buffer.viewport().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::viewport::Viewport;

    #[test]
    fn test_present_writes_header_and_rgb_payload() {
        let mut buffer = PixelBuffer::new(Viewport::new(2, 1).unwrap());
        buffer.set_pixel(Point { x: 1, y: 0 }, Colour::WHITE).unwrap();

        let filepath = std::env::temp_dir().join(format!(
            "julia_explorer_ppm_test_{}.ppm",
            std::process::id()
        ));

        PpmFilePresenter::new().present(&buffer, &filepath).unwrap();
        let contents = std::fs::read(&filepath).unwrap();
        std::fs::remove_file(&filepath).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 255, 255, 255]);

        assert_eq!(contents, expected);
    }
}
