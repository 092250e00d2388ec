use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::core::input::{parse_favorites, InputError};
use crate::models::domain::Candidate;

/// Request to score two favorites lists against each other
///
/// Favorites stay loosely typed until [`ScoreRequest::favorites`] so that a
/// missing list means "empty" and a non-string item is reported precisely.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[serde(alias = "user1_favorites", rename = "user1Favorites", default)]
    pub user1_favorites: Option<Value>,
    #[serde(alias = "user2_favorites", rename = "user2Favorites", default)]
    pub user2_favorites: Option<Value>,
    #[validate(length(min = 1))]
    #[serde(alias = "user1_id", rename = "user1Id", default)]
    pub user1_id: Option<String>,
    #[validate(length(min = 1))]
    #[serde(alias = "user2_id", rename = "user2Id", default)]
    pub user2_id: Option<String>,
}

impl ScoreRequest {
    pub fn favorites(&self) -> Result<(Vec<String>, Vec<String>), InputError> {
        Ok((
            parse_favorites(self.user1_favorites.as_ref())?,
            parse_favorites(self.user2_favorites.as_ref())?,
        ))
    }
}

/// Candidate as received on the wire, before its favorites are checked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCandidate {
    #[serde(default)]
    pub favorites: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RawCandidate {
    pub fn into_candidate(self, index: usize) -> Result<Candidate, InputError> {
        let favorites =
            parse_favorites(self.favorites.as_ref()).map_err(|e| InputError::Candidate {
                index,
                source: Box::new(e),
            })?;

        Ok(Candidate {
            favorites,
            fields: self.fields,
        })
    }
}

/// Request to rank a candidate pool for one user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[serde(alias = "my_favorites", rename = "myFavorites", default)]
    pub my_favorites: Option<Value>,
    #[serde(default)]
    pub candidates: Vec<RawCandidate>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

impl RankRequest {
    /// Split into the user's favorites and checked candidates
    pub fn into_parts(self) -> Result<(Vec<String>, Vec<Candidate>), InputError> {
        let my_favorites = parse_favorites(self.my_favorites.as_ref())?;
        let candidates = self
            .candidates
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_candidate(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((my_favorites, candidates))
    }
}

/// Request to detect the dominant vibe of one list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectVibeRequest {
    #[serde(default)]
    pub favorites: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_request_missing_lists_are_empty() {
        let req: ScoreRequest = serde_json::from_value(json!({})).unwrap();
        let (a, b) = req.favorites().unwrap();
        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn test_score_request_accepts_snake_case() {
        let req: ScoreRequest = serde_json::from_value(json!({
            "user1_favorites": ["coffee"],
            "user2Favorites": ["tea"],
        }))
        .unwrap();
        let (a, b) = req.favorites().unwrap();
        assert_eq!(a, vec!["coffee"]);
        assert_eq!(b, vec!["tea"]);
    }

    #[test]
    fn test_rank_request_keeps_passthrough_fields() {
        let req: RankRequest = serde_json::from_value(json!({
            "myFavorites": ["coffee"],
            "candidates": [
                {"user_id": "a", "favorites": ["coffee"], "age": 30},
                {"user_id": "b"}
            ]
        }))
        .unwrap();

        let (mine, candidates) = req.into_parts().unwrap();
        assert_eq!(mine, vec!["coffee"]);
        assert_eq!(candidates[0].fields["age"], json!(30));
        assert!(!candidates[0].fields.contains_key("favorites"));
        assert!(candidates[1].favorites.is_empty());
    }

    #[test]
    fn test_rank_request_reports_candidate_index() {
        let req: RankRequest = serde_json::from_value(json!({
            "myFavorites": ["coffee"],
            "candidates": [
                {"favorites": ["ok"]},
                {"favorites": ["fine", true]}
            ]
        }))
        .unwrap();

        let err = req.into_parts().unwrap_err();
        assert_eq!(
            err.to_string(),
            "candidate 1: favorite at index 1 must be a string, got true"
        );
    }

    #[test]
    fn test_rank_request_rejects_zero_limit() {
        let req: RankRequest = serde_json::from_value(json!({"limit": 0})).unwrap();
        assert!(req.validate().is_err());
    }
}
