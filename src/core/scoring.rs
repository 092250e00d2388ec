use crate::core::{
    normalize::normalize_all,
    relation::relation_score,
    taxonomy::Taxonomy,
    vibe::detect_vibe,
};
use crate::models::{ExactMatch, MatchResult, RelatedMatch};

/// Points for each pair of identical favorites
pub const EXACT_MATCH_POINTS: u32 = 20;

/// Points when both users share the same dominant vibe
pub const VIBE_MATCH_POINTS: u32 = 15;

/// Upper bound of the compatibility score
pub const MAX_SCORE: u32 = 100;

/// Calculate the compatibility (0-100) between two favorites lists
///
/// Scoring formula:
/// score = min(100,
///     20 * exact_pairs +           # equal after normalization
///     sum(relation_scores) +       # 10 or 15 per related pair
///     15 * vibe_match              # same dominant vibe
/// )
///
/// Both passes scan the full cross product, so a favorite listed twice
/// scores twice.
pub fn calculate_match_score<S: AsRef<str>>(
    taxonomy: &Taxonomy,
    user1_favorites: &[S],
    user2_favorites: &[S],
) -> MatchResult {
    let normalized1 = normalize_all(user1_favorites);
    let normalized2 = normalize_all(user2_favorites);

    let mut total: u32 = 0;
    let mut exact_matches = Vec::new();
    let mut related_matches = Vec::new();

    // Pass 1: exact matches
    for (i, fav1) in normalized1.iter().enumerate() {
        if fav1.is_empty() {
            continue;
        }
        for (j, fav2) in normalized2.iter().enumerate() {
            if fav1 == fav2 {
                total += EXACT_MATCH_POINTS;
                exact_matches.push(ExactMatch {
                    item: user1_favorites[i].as_ref().to_string(),
                    index1: i,
                    index2: j,
                });
            }
        }
    }

    // Pass 2: related matches
    for (i, fav1) in normalized1.iter().enumerate() {
        if fav1.is_empty() {
            continue;
        }
        for (j, fav2) in normalized2.iter().enumerate() {
            if fav2.is_empty() || fav1 == fav2 {
                continue;
            }

            let score = relation_score(taxonomy, fav1, fav2);
            if score > 0 {
                total += u32::from(score);
                related_matches.push(RelatedMatch {
                    item1: user1_favorites[i].as_ref().to_string(),
                    item2: user2_favorites[j].as_ref().to_string(),
                    score,
                    index1: i,
                    index2: j,
                });
            }
        }
    }

    // Pass 3: vibe match
    let user1_vibe = detect_vibe(taxonomy, user1_favorites);
    let user2_vibe = detect_vibe(taxonomy, user2_favorites);
    let vibe_match = matches!((user1_vibe, user2_vibe), (Some(a), Some(b)) if a == b);

    if vibe_match {
        total += VIBE_MATCH_POINTS;
    }

    tracing::debug!(
        "Scored favorites: {} exact, {} related, vibe_match={}, raw={}",
        exact_matches.len(),
        related_matches.len(),
        vibe_match,
        total
    );

    MatchResult {
        // bounded by MAX_SCORE, fits in u8
        total_score: total.min(MAX_SCORE) as u8,
        exact_matches,
        related_matches,
        vibe_match,
        user1_vibe,
        user2_vibe,
    }
}
