use crate::controllers::interactive::ports::StatusSink;

/// Status sink for headless runs: every update goes to the log.
#[derive(Debug, Default)]
pub struct LogStatusSink {}

impl StatusSink for LogStatusSink {
    fn set_text(&mut self, text: &str) {
        log::info!("c = {}", text);
    }
}
