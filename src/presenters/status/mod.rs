pub mod label;
pub mod log_sink;
