use crate::core::{normalize::normalize, taxonomy::Taxonomy};
use crate::models::Vibe;

/// Detect the dominant vibe of a favorites list
///
/// Each favorite counts at most once per pattern. A pattern qualifies once
/// its count reaches the threshold; the highest count wins and ties go to the
/// pattern declared first.
pub fn detect_vibe<S: AsRef<str>>(taxonomy: &Taxonomy, favorites: &[S]) -> Option<Vibe> {
    let normalized: Vec<String> = favorites
        .iter()
        .map(|f| normalize(f.as_ref()))
        .filter(|f| !f.is_empty())
        .collect();

    let mut best: Option<(Vibe, usize)> = None;

    for pattern in taxonomy.vibe_patterns() {
        let count = normalized.iter().filter(|f| pattern.hits(f)).count();

        if count < pattern.threshold {
            continue;
        }

        // Strictly greater keeps the earlier pattern on ties
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((pattern.vibe, count));
        }
    }

    tracing::trace!("Detected vibe {:?} from {} favorites", best, normalized.len());

    best.map(|(vibe, _)| vibe)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vibe_of(favorites: &[&str]) -> Option<Vibe> {
        detect_vibe(Taxonomy::standard(), favorites)
    }

    #[test]
    fn test_night_owl() {
        assert_eq!(
            vibe_of(&["3am walks", "midnight snack", "insomnia thoughts"]),
            Some(Vibe::NightOwl)
        );
    }

    #[test]
    fn test_below_threshold_is_none() {
        assert_eq!(vibe_of(&["midnight snack", "chess"]), None);
        assert_eq!(vibe_of(&[]), None);
    }

    #[test]
    fn test_one_count_per_favorite() {
        // Two keywords in a single favorite still count once
        assert_eq!(vibe_of(&["late night 3am walks"]), None);
        assert_eq!(vibe_of(&["late night 3am walks", "midnight"]), Some(Vibe::NightOwl));
    }

    #[test]
    fn test_highest_count_wins() {
        // "parties" contains "art", giving creative three hits against social's two
        assert_eq!(
            vibe_of(&["painting", "music", "parties", "friends"]),
            Some(Vibe::Creative)
        );
    }

    #[test]
    fn test_ties_go_to_first_declared() {
        assert_eq!(
            vibe_of(&["3am", "midnight", "spreadsheets", "planning"]),
            Some(Vibe::NightOwl)
        );
        assert_eq!(
            vibe_of(&["music", "drawing", "hosting", "meetups"]),
            Some(Vibe::Creative)
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(vibe_of(&["Solo TRAVEL", "Exploring Caves"]), Some(Vibe::Adventurous));
    }
}
