pub trait StatusSink {
    fn set_text(&mut self, text: &str);
}
