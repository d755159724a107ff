use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    LengthMismatch { rgb_len: usize, rgba_len: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { rgb_len, rgba_len } => {
                write!(
                    f,
                    "rgb frame of {} bytes does not fit rgba frame of {} bytes",
                    rgb_len, rgba_len
                )
            }
        }
    }
}

impl Error for PixelFormatError {}

/// Expands packed RGB into an RGBA framebuffer with opaque alpha.
pub fn copy_rgb_to_rgba(rgb: &[u8], rgba: &mut [u8]) -> Result<(), PixelFormatError> {
    if rgb.len() % 3 != 0 || rgb.len() / 3 * 4 != rgba.len() {
        return Err(PixelFormatError::LengthMismatch {
            rgb_len: rgb.len(),
            rgba_len: rgba.len(),
        });
    }

    for (src, dst) in rgb.chunks_exact(3).zip(rgba.chunks_exact_mut(4)) {
        dst[..3].copy_from_slice(src);
        dst[3] = u8::MAX;
    }

    Ok(())
}
