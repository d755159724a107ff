//! Event and outcome types exchanged with the interactive controller.

/// A pointer event in surface-local pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Click { x: f64, y: f64 },
}

/// What the controller did in response to a pointer event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The constant followed the pointer and the frame was redrawn.
    ConstantChanged,
    /// The view was re-centred and the frame was redrawn.
    Panned,
    /// The first click froze the constant. Nothing was redrawn.
    Armed,
    /// The event does not apply in the current mode.
    Ignored,
    /// The event carried a non-finite coordinate and was dropped.
    Rejected,
}

impl InteractionOutcome {
    #[must_use]
    pub fn redrew(self) -> bool {
        matches!(self, Self::ConstantChanged | Self::Panned)
    }
}
