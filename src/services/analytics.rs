use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;

use crate::models::MatchingPattern;

/// Errors that can occur while recording analytics
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}

/// Destination for per-comparison matching patterns
///
/// Recording is best-effort: callers log failures and carry on.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, pattern: &MatchingPattern) -> Result<(), AnalyticsError>;
}

/// Emits each matching pattern as a structured log event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, pattern: &MatchingPattern) -> Result<(), AnalyticsError> {
        let exact = serde_json::to_string(&pattern.exact_matches)?;
        let related = serde_json::to_string(&pattern.related_matches)?;

        tracing::info!(
            target: "philos_match::analytics",
            id = %pattern.id,
            user_a = %pattern.user_a_id,
            user_b = %pattern.user_b_id,
            score = pattern.match_score,
            exact_matches = %exact,
            related_matches = %related,
            vibe_match = pattern.vibe_match,
            user_a_vibe = ?pattern.user_a_vibe,
            user_b_vibe = ?pattern.user_b_vibe,
            "matching pattern"
        );

        Ok(())
    }
}

/// Keeps matching patterns in memory, bounded to the most recent `capacity`
#[derive(Debug)]
pub struct MemorySink {
    records: Mutex<VecDeque<MatchingPattern>>,
    capacity: usize,
}

impl MemorySink {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    /// Snapshot of the recorded patterns, oldest first
    pub fn records(&self) -> Vec<MatchingPattern> {
        self.records
            .lock()
            .map(|r| r.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&self, pattern: &MatchingPattern) -> Result<(), AnalyticsError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| AnalyticsError::Unavailable(e.to_string()))?;

        if self.capacity == 0 {
            return Ok(());
        }
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(pattern.clone());
        Ok(())
    }
}
