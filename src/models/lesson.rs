use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A practice challenge with starter code and a reference solution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub category: String,
    pub starting_code: String,
    pub solution: String,
}

/// A lesson topic: explanatory sections with runnable examples, plus an optional challenge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub challenge: Option<TopicChallenge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicChallenge {
    pub title: String,
    pub description: String,
    pub starting_code: String,
    pub solution: String,
}

/// Which text of an exercise to load into the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Starting,
    Solution,
}

impl Challenge {
    pub fn code(&self, variant: Variant) -> &str {
        match variant {
            Variant::Starting => &self.starting_code,
            Variant::Solution => &self.solution,
        }
    }
}

impl TopicChallenge {
    pub fn code(&self, variant: Variant) -> &str {
        match variant {
            Variant::Starting => &self.starting_code,
            Variant::Solution => &self.solution,
        }
    }
}
