//! Windowed pointer input: winit for events and the window, pixels for the
//! framebuffer, egui for the status overlay.

mod app;
pub mod commands;
