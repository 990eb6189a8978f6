use super::transcript::{EMPTY_RUN_MESSAGE, EntryKind, Transcript, TranscriptEntry};

/// Accumulates transcript entries for the current run.
///
/// Arguments arrive already rendered; the recorder only joins, sequences and stores them.
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Vec<TranscriptEntry>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry whose text is the rendered arguments joined by a single space.
    /// Zero arguments yield an empty string.
    pub fn record<I>(&mut self, kind: EntryKind, rendered_arguments: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut text = String::new();
        for (i, part) in rendered_arguments.into_iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(part.as_ref());
        }
        self.push(kind, text);
    }

    pub fn record_fault(&mut self, message: impl Into<String>) {
        self.push(EntryKind::Fault, message.into());
    }

    /// Close out the run. An empty run gets a single `EmptyRun` entry; calling this again
    /// without new records returns the same transcript.
    pub fn finalize(&mut self) -> Transcript {
        if self.entries.is_empty() {
            self.push(EntryKind::EmptyRun, EMPTY_RUN_MESSAGE.to_string());
        }
        Transcript {
            entries: self.entries.clone(),
        }
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    fn push(&mut self, kind: EntryKind, text: String) {
        let sequence = self.entries.len();
        self.entries.push(TranscriptEntry {
            kind,
            text,
            sequence,
        });
    }
}
