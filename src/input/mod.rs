use std::path::Path;
use once_cell::sync::Lazy;
use regex::Regex;

static CHALLENGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)challenge:(\d+)$").unwrap());
static TOPIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)topic:([a-z0-9_-]+)(?:#(\d+))?$").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub enum InputType {
    Stdin,
    Challenge(u32),
    /// Topic challenge, or the n-th (1-based) section example when `section` is set
    Topic { slug: String, section: Option<usize> },
    LocalFile(String),
    Inline(String),
}

pub fn detect_input(input: &str) -> InputType {
    let trimmed = input.trim();

    if trimmed == "-" {
        return InputType::Stdin;
    }

    if let Some(caps) = CHALLENGE_RE.captures(trimmed)
        && let Ok(id) = caps[1].parse()
    {
        return InputType::Challenge(id);
    }

    if let Some(caps) = TOPIC_RE.captures(trimmed) {
        return InputType::Topic {
            slug: caps[1].to_lowercase(),
            section: caps.get(2).and_then(|m| m.as_str().parse().ok()),
        };
    }

    let lower = trimmed.to_lowercase();
    if lower.ends_with(".js") || lower.ends_with(".mjs") || lower.ends_with(".cjs") {
        return InputType::LocalFile(trimmed.to_string());
    }

    if !trimmed.is_empty() && Path::new(trimmed).exists() {
        return InputType::LocalFile(trimmed.to_string());
    }

    // Default: the argument is the code itself
    InputType::Inline(input.to_string())
}
