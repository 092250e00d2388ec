// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, Designation, DesignationType, ExactMatch, MatchDetail, MatchResult,
    MatchingPattern, RankedCandidate, RelatedMatch, RelatedPair, Vibe,
};
pub use requests::{DetectVibeRequest, RankRequest, RawCandidate, ScoreRequest};
pub use responses::{
    DetectVibeResponse, ErrorResponse, HealthResponse, RankResponse, ScoreResponse,
};
