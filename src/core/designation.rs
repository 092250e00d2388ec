use crate::models::{Designation, DesignationType, ExactMatch};

pub const INCREDIBLE_MIN_SCORE: u8 = 85;
pub const GREAT_MIN_SCORE: u8 = 65;
pub const OPPOSITES_MAX_SCORE: u8 = 15;

/// Pick the display badge for a match
///
/// Rules are checked in order and the first hit wins:
/// 1. Any exact match, whatever the score
/// 2. score >= 85
/// 3. score >= 65
/// 4. score <= 15, including 0
///
/// Scores of 16-64 without an exact match get no badge.
pub fn match_designation(score: u8, exact_matches: &[ExactMatch]) -> Option<Designation> {
    if let Some(first) = exact_matches.first() {
        return Some(badge(
            DesignationType::Exact,
            "⚡",
            "EXACT MATCH",
            format!("You both love '{}'!", first.item),
            "#FFD700",
        ));
    }

    if score >= INCREDIBLE_MIN_SCORE {
        return Some(badge(
            DesignationType::Incredible,
            "🔥",
            "INCREDIBLE MATCH",
            "You two are meant to be friends!".to_string(),
            "#FF6B35",
        ));
    }

    if score >= GREAT_MIN_SCORE {
        return Some(badge(
            DesignationType::Great,
            "✨",
            "GREAT MATCH",
            "You have a lot in common!".to_string(),
            "#7FB5A6",
        ));
    }

    // A pure vibe match scores exactly 15 and still lands here
    if score <= OPPOSITES_MAX_SCORE {
        return Some(badge(
            DesignationType::Opposites,
            "🧲",
            "OPPOSITES ATTRACT",
            "Sometimes the best friendships are unexpected!".to_string(),
            "#9B8B7A",
        ));
    }

    None
}

fn badge(
    kind: DesignationType,
    emoji: &str,
    label: &str,
    description: String,
    color: &str,
) -> Designation {
    Designation {
        kind,
        emoji: emoji.to_string(),
        label: label.to_string(),
        description,
        color: color.to_string(),
    }
}
