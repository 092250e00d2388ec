use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Coarse lifestyle tag inferred from a favorites list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Vibe {
    NightOwl,
    Organized,
    Creative,
    Social,
    Adventurous,
}

impl Vibe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vibe::NightOwl => "nightOwl",
            Vibe::Organized => "organized",
            Vibe::Creative => "creative",
            Vibe::Social => "social",
            Vibe::Adventurous => "adventurous",
        }
    }

    /// Lowercase words for display, e.g. "night owl"
    pub fn humanized(&self) -> String {
        let mut out = String::new();
        for c in self.as_str().chars() {
            if c.is_ascii_uppercase() {
                out.push(' ');
            }
            out.push(c.to_ascii_lowercase());
        }
        out
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pair of favorites equal after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactMatch {
    /// The first user's favorite as submitted
    pub item: String,
    pub index1: usize,
    pub index2: usize,
}

/// A pair of different favorites linked by the taxonomy or a shared word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedMatch {
    pub item1: String,
    pub item2: String,
    pub score: u8,
    pub index1: usize,
    pub index2: usize,
}

/// Compatibility of two favorites lists, with the evidence behind the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "totalScore")]
    pub total_score: u8,
    #[serde(rename = "exactMatches")]
    pub exact_matches: Vec<ExactMatch>,
    #[serde(rename = "relatedMatches")]
    pub related_matches: Vec<RelatedMatch>,
    #[serde(rename = "vibeMatch")]
    pub vibe_match: bool,
    #[serde(rename = "user1Vibe")]
    pub user1_vibe: Option<Vibe>,
    #[serde(rename = "user2Vibe")]
    pub user2_vibe: Option<Vibe>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignationType {
    Exact,
    Incredible,
    Great,
    Opposites,
}

/// Display badge derived from a match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    #[serde(rename = "type")]
    pub kind: DesignationType,
    pub emoji: String,
    pub label: String,
    pub description: String,
    pub color: String,
}

/// One display line explaining a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MatchDetail {
    Exact { text: String, items: Vec<String> },
    Related { text: String, score: u8 },
    Vibe { text: String, vibe: Vibe },
}

/// A candidate user in a discovery pool
///
/// Only `favorites` is read; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Candidate {
    pub fn new(favorites: Vec<String>) -> Self {
        Self {
            favorites,
            fields: Map::new(),
        }
    }

    /// Attach a passthrough field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

/// A candidate annotated with its score against the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate<C> {
    #[serde(flatten)]
    pub candidate: C,
    #[serde(rename = "matchData")]
    pub match_data: MatchResult,
    pub designation: Option<Designation>,
    #[serde(rename = "sortPriority")]
    pub sort_priority: u16,
}

/// Related pair as stored by the analytics sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedPair {
    pub item1: String,
    pub item2: String,
    pub score: u8,
}

/// Analytics record of one comparison between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingPattern {
    pub id: uuid::Uuid,
    #[serde(rename = "recordedAt")]
    pub recorded_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "userAId")]
    pub user_a_id: String,
    #[serde(rename = "userBId")]
    pub user_b_id: String,
    #[serde(rename = "userAFavorites")]
    pub user_a_favorites: Vec<String>,
    #[serde(rename = "userBFavorites")]
    pub user_b_favorites: Vec<String>,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "exactMatches")]
    pub exact_matches: Vec<String>,
    #[serde(rename = "relatedMatches")]
    pub related_matches: Vec<RelatedPair>,
    #[serde(rename = "vibeMatch")]
    pub vibe_match: bool,
    #[serde(rename = "userAVibe")]
    pub user_a_vibe: Option<Vibe>,
    #[serde(rename = "userBVibe")]
    pub user_b_vibe: Option<Vibe>,
}

impl MatchingPattern {
    pub fn new(
        user_a_id: impl Into<String>,
        user_b_id: impl Into<String>,
        user_a_favorites: &[String],
        user_b_favorites: &[String],
        result: &MatchResult,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            recorded_at: chrono::Utc::now(),
            user_a_id: user_a_id.into(),
            user_b_id: user_b_id.into(),
            user_a_favorites: user_a_favorites.to_vec(),
            user_b_favorites: user_b_favorites.to_vec(),
            match_score: result.total_score,
            exact_matches: result.exact_matches.iter().map(|m| m.item.clone()).collect(),
            related_matches: result
                .related_matches
                .iter()
                .map(|m| RelatedPair {
                    item1: m.item1.clone(),
                    item2: m.item2.clone(),
                    score: m.score,
                })
                .collect(),
            vibe_match: result.vibe_match,
            user_a_vibe: result.user1_vibe,
            user_b_vibe: result.user2_vibe,
        }
    }
}
