// Core algorithm exports
pub mod designation;
pub mod details;
pub mod input;
pub mod normalize;
pub mod ranker;
pub mod relation;
pub mod scoring;
pub mod taxonomy;
pub mod vibe;

pub use designation::match_designation;
pub use details::match_details;
pub use input::{parse_favorites, InputError};
pub use normalize::normalize;
pub use ranker::{sort_priority, HasFavorites, Ranker};
pub use relation::relation_score;
pub use scoring::calculate_match_score;
pub use taxonomy::{SemanticCategory, Taxonomy, VibePattern, STANDARD_TAXONOMY};
pub use vibe::detect_vibe;
