//! Philos Match - Compatibility scoring for favorites-based matching
//!
//! This library compares users by their short lists of favorite things. It
//! scores exact and semantically related overlap, detects a dominant lifestyle
//! vibe, assigns a display badge, and ranks candidate pools for a discovery
//! feed. The HTTP service in `main.rs` exposes the same engine over JSON.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    calculate_match_score, detect_vibe, match_designation, match_details, relation_score,
    InputError, Ranker, Taxonomy,
};
pub use self::models::{Candidate, Designation, DesignationType, MatchResult, RankedCandidate, Vibe};
