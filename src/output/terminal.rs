use crate::catalog::Catalog;
use crate::models::Difficulty;
use crate::sandbox::{EntryKind, Transcript, TranscriptEntry};
use colored::*;

/// Line prefix shown before each entry's text
pub fn prefix(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Print => "> ",
        EntryKind::Warning => "⚠️ Warning: ",
        EntryKind::ErrorLog | EntryKind::Fault => "❌ Error: ",
        EntryKind::DialogEcho => "🔔 Alert: ",
        EntryKind::EmptyRun => "✅ ",
    }
}

/// Uncolored display line for one entry
pub fn format_entry(entry: &TranscriptEntry) -> String {
    format!("{}{}", prefix(entry.kind), entry.text)
}

pub fn print_transcript(title: &str, transcript: &Transcript) {
    print_header(title);

    for entry in transcript {
        print_entry(entry);
    }

    println!();
}

fn print_header(title: &str) {
    println!("{}", "┌─────────────────────────────────────────────────────────────┐".bright_black());
    println!("│  Output: {:<51}│", title.bold());
    println!("{}", "└─────────────────────────────────────────────────────────────┘".bright_black());
}

fn print_entry(entry: &TranscriptEntry) {
    let line = format_entry(entry);
    let colored_line = match entry.kind {
        EntryKind::Print => line.normal(),
        EntryKind::Warning => line.yellow(),
        EntryKind::ErrorLog => line.red(),
        EntryKind::Fault => line.red().bold(),
        EntryKind::DialogEcho => line.cyan(),
        EntryKind::EmptyRun => line.green(),
    };
    println!("{}", colored_line);
}

pub fn print_catalog(catalog: &Catalog) {
    println!("{}", "── Challenges ───────────────────────────────────────────────".bright_black());

    for challenge in &catalog.challenges {
        let difficulty = match challenge.difficulty {
            Difficulty::Easy => challenge.difficulty.as_str().green(),
            Difficulty::Medium => challenge.difficulty.as_str().yellow(),
            Difficulty::Hard => challenge.difficulty.as_str().red(),
        };
        println!(
            "  {:>3}  {:<8} {:<30} {}",
            format!("#{}", challenge.id).cyan(),
            difficulty,
            challenge.title,
            challenge.category.bright_black()
        );
        for line in textwrap::wrap(&challenge.description, 58) {
            println!("            {}", line.bright_black());
        }
    }

    println!();
    println!("{}", "── Topics ───────────────────────────────────────────────────".bright_black());

    for topic in &catalog.topics {
        println!("  {} {}", format!("topic:{}", topic.slug).cyan(), topic.title.bold());
        for (i, section) in topic.sections.iter().enumerate() {
            println!("    #{} {}", i + 1, section.title);
        }
        if let Some(ref challenge) = topic.challenge {
            println!("    {} {}", "challenge:".bright_black(), challenge.title);
        }
    }

    println!();
}
