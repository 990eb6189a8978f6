pub mod terminal;

pub use terminal::{format_entry, print_catalog, print_transcript};
