pub mod pixel_format;
pub mod presenter;
