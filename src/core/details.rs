use crate::models::{MatchDetail, MatchResult, RelatedMatch};

/// Maximum related pairs shown under a match
const MAX_RELATED_DETAILS: usize = 2;

/// Build the display lines explaining a match result
///
/// Exact matches come first, then the strongest related pairs, then the
/// shared vibe. The result itself is left untouched.
pub fn match_details(result: &MatchResult) -> Vec<MatchDetail> {
    let mut details = Vec::new();

    if let Some(first) = result.exact_matches.first() {
        details.push(MatchDetail::Exact {
            text: format!("⚡ You both love \"{}\"", first.item),
            items: result.exact_matches.iter().map(|m| m.item.clone()).collect(),
        });
    }

    let mut related: Vec<&RelatedMatch> = result.related_matches.iter().collect();
    // stable: equal scores keep scan order
    related.sort_by(|a, b| b.score.cmp(&a.score));

    details.extend(related.into_iter().take(MAX_RELATED_DETAILS).map(|m| {
        MatchDetail::Related {
            text: format!("{} ↔ {}", m.item1, m.item2),
            score: m.score,
        }
    }));

    if result.vibe_match {
        if let Some(vibe) = result.user1_vibe {
            details.push(MatchDetail::Vibe {
                text: format!("You're both {}!", vibe.humanized()),
                vibe,
            });
        }
    }

    details
}
