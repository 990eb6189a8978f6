use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::{Challenge, Topic};

const BUILTIN_CATALOG: &str = include_str!("builtin.json");

/// Lesson and challenge content the sandbox runs. Opaque text as far as execution goes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Catalog {
    /// The practice challenges and lesson topics shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("Built-in catalog is malformed")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog = serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid catalog {}", path.display()))
    }

    pub fn challenge(&self, id: u32) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn topic(&self, slug: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.slug.eq_ignore_ascii_case(slug))
    }
}
