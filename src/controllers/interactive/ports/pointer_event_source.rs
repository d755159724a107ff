use crate::controllers::interactive::types::PointerEvent;
use std::collections::VecDeque;

/// Delivers pointer events already translated to surface-local pixels.
pub trait PointerEventSource {
    fn next_event(&mut self) -> Option<PointerEvent>;
}

impl PointerEventSource for VecDeque<PointerEvent> {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.pop_front()
    }
}
