use serde::{Deserialize, Serialize};

/// Which field of an entry is being scored. Determines match weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Title,
    Author,
    Other,
}

impl FieldKind {
    /// Base score when the whole query appears as a substring of the field.
    pub fn substring_weight(&self) -> u32 {
        match self {
            FieldKind::Title => 100,
            FieldKind::Author => 80,
            FieldKind::Other => 60,
        }
    }

    /// Full-overlap score for the token-matching path.
    pub fn token_weight(&self) -> u32 {
        match self {
            FieldKind::Title => 50,
            _ => 30,
        }
    }
}

/// A searchable listing entry: a governance proposal or charity campaign.
/// Fields are optional so partial records deserialize; a missing field
/// contributes zero score.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Result of scoring a single field against a query. `highlighted` is
/// present only for substring matches; token-overlap matches carry a score
/// but no rendering.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredMatch {
    pub score: u32,
    pub highlighted: Option<String>,
}

/// An entry paired with its total relevance score and the highlighted
/// rendering of its best-scoring field, if any field had a substring match.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedEntry {
    pub entry: SearchEntry,
    pub score: u32,
    pub highlight: Option<String>,
}
