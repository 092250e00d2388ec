use crate::core::taxonomy::Taxonomy;

/// Points for two favorites in the same semantic category
pub const STRONG_RELATION: u8 = 15;

/// Points for a category/related-keyword link or a shared word
pub const WEAK_RELATION: u8 = 10;

/// Tokens must be longer than this (in UTF-16 code units) to count as a shared word
const MIN_TOKEN_LEN: usize = 3;

/// Score how related two normalized, non-empty, non-equal favorites are
///
/// Categories are checked in declared order and the first one that decides
/// wins. Falls back to a shared-word check when no category applies.
///
/// # Returns
/// 0, [`WEAK_RELATION`] or [`STRONG_RELATION`]
pub fn relation_score(taxonomy: &Taxonomy, a: &str, b: &str) -> u8 {
    for category in taxonomy.categories() {
        let a_in = category.contains(a);
        let b_in = category.contains(b);

        if a_in && b_in {
            return STRONG_RELATION;
        }

        if (a_in && category.is_related(b)) || (b_in && category.is_related(a)) {
            return WEAK_RELATION;
        }
    }

    if shares_word(a, b) {
        return WEAK_RELATION;
    }

    0
}

/// Whether any pair of long-enough words contain one another
fn shares_word(a: &str, b: &str) -> bool {
    fn long_words(s: &str) -> Vec<&str> {
        s.split_whitespace()
            .filter(|w| w.encode_utf16().count() > MIN_TOKEN_LEN)
            .collect()
    }

    let words_b = long_words(b);

    long_words(a).into_iter().any(|wa| {
        words_b
            .iter()
            .any(|wb| wa.contains(wb) || wb.contains(wa))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::taxonomy::{SemanticCategory, VIBE_PATTERNS};

    fn relate(a: &str, b: &str) -> u8 {
        relation_score(Taxonomy::standard(), a, b)
    }

    #[test]
    fn test_same_category_is_strong() {
        assert_eq!(relate("hiking", "camping"), 15);
        assert_eq!(relate("coffee", "espresso"), 15);
        assert_eq!(relate("painting", "drawing"), 15);
    }

    #[test]
    fn test_related_keyword_is_weak() {
        // "late night drives" is lateNight, "coffee" is one of its related keywords
        assert_eq!(relate("coffee", "late night drives"), 10);
        assert_eq!(relate("late night drives", "coffee"), 10);
    }

    #[test]
    fn test_substring_membership_both_ways() {
        // "art" sits inside "party", so both land in the creative category
        assert_eq!(relate("art", "party"), 15);
    }

    #[test]
    fn test_shared_word_fallback() {
        assert_eq!(relate("board games", "video games"), 10);
    }

    #[test]
    fn test_short_words_ignored() {
        // "the" is too short to count
        assert_eq!(relate("the chess", "the sushi"), 0);
    }

    #[test]
    fn test_word_length_counts_utf16_units() {
        // two astral emoji are four UTF-16 units, long enough to share
        assert_eq!(relate("\u{1f600}\u{1f600}", "\u{1f600}\u{1f600}!"), 10);
        // one emoji plus a letter is three units
        assert_eq!(relate("\u{1f600}x", "\u{1f600}x!"), 0);
    }

    #[test]
    fn test_unrelated_is_zero() {
        assert_eq!(relate("reading", "writing"), 0);
        assert_eq!(relate("chess", "sushi"), 0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("hiking", "yoga"),
            ("coffee", "late night drives"),
            ("board games", "video games"),
            ("museums", "pottery"),
            ("chess", "tacos"),
        ];
        for (a, b) in pairs {
            assert_eq!(relate(a, b), relate(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn test_declared_order_decides() {
        const OUTDOOR_FIRST: &[SemanticCategory] = &[
            SemanticCategory {
                name: "walking",
                keywords: &["hiking"],
                related: &["camping"],
            },
            SemanticCategory {
                name: "outdoor",
                keywords: &["hiking", "camping"],
                related: &[],
            },
        ];
        const OUTDOOR_LAST: &[SemanticCategory] = &[
            SemanticCategory {
                name: "outdoor",
                keywords: &["hiking", "camping"],
                related: &[],
            },
            SemanticCategory {
                name: "walking",
                keywords: &["hiking"],
                related: &["camping"],
            },
        ];

        let first = Taxonomy::new(OUTDOOR_FIRST, VIBE_PATTERNS);
        let last = Taxonomy::new(OUTDOOR_LAST, VIBE_PATTERNS);

        assert_eq!(relation_score(&first, "hiking", "camping"), WEAK_RELATION);
        assert_eq!(relation_score(&last, "hiking", "camping"), STRONG_RELATION);
    }
}
