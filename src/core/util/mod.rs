pub mod pixel_to_point;
