use crate::controllers::interactive::ports::StatusSink;

/// Keeps the latest status text for a UI to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLabel {
    text: String,
}

impl StatusSink for StatusLabel {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }
}

impl StatusLabel {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_keeps_latest_text() {
        let mut label = StatusLabel::default();
        assert_eq!(label.text(), "");

        label.set_text("0.28 + 0.01i");
        label.set_text("-0.5i");

        assert_eq!(label.text(), "-0.5i");
    }
}
