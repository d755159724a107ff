use crate::core::data::complex::Complex;

/// Which pointer events the state currently responds to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InteractionMode {
    /// Pointer moves pick the constant.
    Unclicked,
    /// The constant is frozen; clicks re-centre the view.
    Clicked,
}

/// Everything a frame depends on besides the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderState {
    pub constant: Complex,
    pub pan: Complex,
    pub has_clicked_once: bool,
}

impl RenderState {
    #[must_use]
    pub fn new(constant: Complex) -> Self {
        Self {
            constant,
            pan: Complex::ZERO,
            has_clicked_once: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.has_clicked_once {
            InteractionMode::Clicked
        } else {
            InteractionMode::Unclicked
        }
    }
}
