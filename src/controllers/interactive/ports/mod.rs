//! Port definitions for the interactive controller.

pub mod pointer_event_source;
pub mod status_sink;

pub use pointer_event_source::PointerEventSource;
pub use status_sink::StatusSink;
