use serde::{Deserialize, Serialize};

/// Message recorded when a run finishes without producing any output
pub const EMPTY_RUN_MESSAGE: &str = "Code executed successfully (no output)";

/// What produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// `console.log(...)`
    Print,
    /// `console.warn(...)`
    Warning,
    /// `console.error(...)`; does not stop the run
    ErrorLog,
    /// Uncaught compile or runtime error; always the last entry
    Fault,
    /// `alert(...)`
    DialogEcho,
    /// Synthetic entry for a run that produced nothing
    EmptyRun,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Print => "print",
            EntryKind::Warning => "warning",
            EntryKind::ErrorLog => "error_log",
            EntryKind::Fault => "fault",
            EntryKind::DialogEcho => "dialog_echo",
            EntryKind::EmptyRun => "empty_run",
        }
    }
}

/// One observable effect of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    /// Rendered payload
    pub text: String,
    /// Zero-based position in the run
    pub sequence: usize,
}

/// Finalized, ordered record of a single run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranscriptEntry> {
        self.entries.iter()
    }

    /// The terminal fault entry, if the run raised
    pub fn fault(&self) -> Option<&TranscriptEntry> {
        self.entries.last().filter(|e| e.kind == EntryKind::Fault)
    }

    pub fn is_faulted(&self) -> bool {
        self.fault().is_some()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn kinds(&self) -> Vec<EntryKind> {
        self.entries.iter().map(|e| e.kind).collect()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TranscriptEntry;
    type IntoIter = std::slice::Iter<'a, TranscriptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
