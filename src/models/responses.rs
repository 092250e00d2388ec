use serde::{Deserialize, Serialize};
use crate::models::domain::{Candidate, Designation, MatchDetail, MatchResult, RankedCandidate, Vibe};

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "matchData")]
    pub match_data: MatchResult,
    pub designation: Option<Designation>,
    pub details: Vec<MatchDetail>,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub candidates: Vec<RankedCandidate<Candidate>>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the vibe endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectVibeResponse {
    pub vibe: Option<Vibe>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
