// Service exports
pub mod analytics;
pub mod cache;

pub use analytics::{AnalyticsError, AnalyticsSink, MemorySink, TracingSink};
pub use cache::{CacheStats, CompatibilityCache, ScoreKey};
