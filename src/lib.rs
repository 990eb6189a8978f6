pub mod catalog;
pub mod editor;
pub mod input;
pub mod models;
pub mod output;
pub mod sandbox;

pub use models::*;
pub use sandbox::{EntryKind, Sandbox, Transcript, TranscriptEntry, execute_snippet};
