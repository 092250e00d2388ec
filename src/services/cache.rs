use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::MatchResult;

/// Ordered pair of raw favorites lists a result was computed for
pub type ScoreKey = (Vec<String>, Vec<String>);

/// In-process cache of pairwise match results
///
/// Results are keyed by the ordered pair of raw favorites lists, so the
/// reported items and indices always belong to the request that asked.
/// A disabled cache computes every result.
pub struct CompatibilityCache {
    inner: Option<moka::future::Cache<ScoreKey, MatchResult>>,
}

impl CompatibilityCache {
    /// Create a cache holding up to `capacity` results for `ttl_secs` each
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let inner = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner: Some(inner) }
    }

    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Return the cached result for this pair, computing it on a miss
    pub async fn get_or_compute<F>(
        &self,
        user1_favorites: &[String],
        user2_favorites: &[String],
        compute: F,
    ) -> MatchResult
    where
        F: FnOnce() -> MatchResult,
    {
        let Some(cache) = &self.inner else {
            return compute();
        };

        let key: ScoreKey = (user1_favorites.to_vec(), user2_favorites.to_vec());

        if let Some(result) = cache.get(&key).await {
            tracing::trace!("Score cache hit ({} x {} favorites)", key.0.len(), key.1.len());
            return result;
        }

        tracing::trace!("Score cache miss ({} x {} favorites)", key.0.len(), key.1.len());
        let result = compute();
        cache.insert(key, result.clone()).await;
        result
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            enabled: self.is_enabled(),
            entries: self.inner.as_ref().map_or(0, |c| c.entry_count()),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub enabled: bool,
    pub entries: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{scoring::calculate_match_score, taxonomy::Taxonomy};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_second_lookup_is_cached() {
        let cache = CompatibilityCache::new(100, 60);
        let calls = AtomicUsize::new(0);
        let a = list(&["coffee", "hiking"]);
        let b = list(&["coffee"]);

        for _ in 0..2 {
            let result = cache
                .get_or_compute(&a, &b, || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    calculate_match_score(Taxonomy::standard(), &a, &b)
                })
                .await;
            assert_eq!(result.total_score, 20);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_always_computes() {
        let cache = CompatibilityCache::disabled();
        let calls = AtomicUsize::new(0);
        let a = list(&["chess"]);

        for _ in 0..3 {
            tokio_test::block_on(cache.get_or_compute(&a, &a, || {
                calls.fetch_add(1, Ordering::SeqCst);
                calculate_match_score(Taxonomy::standard(), &a, &a)
            }));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(!cache.stats().enabled);
    }

    #[tokio::test]
    async fn test_separator_characters_do_not_share_entries() {
        let cache = CompatibilityCache::new(100, 60);
        fn score(a: &[String], b: &[String]) -> MatchResult {
            calculate_match_score(Taxonomy::standard(), a, b)
        }

        let a1 = list(&["coffee\u{1e}coffee"]);
        let b1: Vec<String> = Vec::new();
        let first = cache.get_or_compute(&a1, &b1, || score(&a1, &b1)).await;
        assert_eq!(first.total_score, 0);

        let a2 = list(&["coffee"]);
        let b2 = list(&["coffee\u{1e}"]);
        let second = cache.get_or_compute(&a2, &b2, || score(&a2, &b2)).await;

        assert_eq!(second, score(&a2, &b2));
        assert_eq!(second.total_score, 15);
        assert_eq!(second.related_matches.len(), 1);
    }

    #[tokio::test]
    async fn test_ordered_pair_is_the_key() {
        let cache = CompatibilityCache::new(100, 60);
        let a = list(&["Coffee", "hiking"]);
        let b = list(&["coffee"]);

        let ab = cache
            .get_or_compute(&a, &b, || calculate_match_score(Taxonomy::standard(), &a, &b))
            .await;
        let ba = cache
            .get_or_compute(&b, &a, || calculate_match_score(Taxonomy::standard(), &b, &a))
            .await;

        assert_eq!(ab.exact_matches[0].item, "Coffee");
        assert_eq!(ba.exact_matches[0].item, "coffee");
    }
}
