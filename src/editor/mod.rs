/// The narrow contract the sandbox has with whatever holds the learner's source text.
pub trait SourceEditor {
    /// Current buffer contents
    fn text(&self) -> String;

    /// Overwrite the buffer, e.g. with the lesson's starting code on reset
    fn set_text(&mut self, text: &str);
}

/// In-memory editor buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    text: String,
}

impl Buffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SourceEditor for Buffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}
