use rayon::prelude::*;

use crate::core::{
    designation::{match_designation, GREAT_MIN_SCORE},
    scoring::calculate_match_score,
    taxonomy::Taxonomy,
};
use crate::models::{Candidate, Designation, DesignationType, MatchResult, RankedCandidate};

/// Pools at least this large are scored on the rayon thread pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Minimum score of the "good match" bucket
const GOOD_MIN_SCORE: u8 = 40;

/// Anything the ranker can read a favorites list from
pub trait HasFavorites {
    fn favorites(&self) -> &[String];
}

impl HasFavorites for Candidate {
    fn favorites(&self) -> &[String] {
        &self.favorites
    }
}

/// Bucket used to order candidates ahead of raw score
///
/// | bucket            | priority |
/// |-------------------|----------|
/// | exact match       | 1000     |
/// | score >= 65       | 800      |
/// | score >= 40       | 600      |
/// | regular           | 400      |
/// | opposites attract | 200      |
pub fn sort_priority(result: &MatchResult, designation: Option<&Designation>) -> u16 {
    let kind = designation.map(|d| d.kind);

    if kind == Some(DesignationType::Exact) {
        1000
    } else if result.total_score >= GREAT_MIN_SCORE {
        800
    } else if result.total_score >= GOOD_MIN_SCORE {
        600
    } else if kind == Some(DesignationType::Opposites) {
        200
    } else {
        400
    }
}

/// Scores a candidate pool against one user's favorites and orders it for a feed
///
/// # Pipeline Stages
/// 1. Score each candidate (in parallel for large pools)
/// 2. Designate and bucket
/// 3. Stable sort by (priority, score), original position breaking ties
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    taxonomy: &'static Taxonomy,
    parallel_threshold: usize,
}

impl Ranker {
    pub fn new(parallel_threshold: usize) -> Self {
        Self {
            taxonomy: Taxonomy::standard(),
            parallel_threshold,
        }
    }

    pub fn with_taxonomy(taxonomy: &'static Taxonomy, parallel_threshold: usize) -> Self {
        Self {
            taxonomy,
            parallel_threshold,
        }
    }

    pub fn taxonomy(&self) -> &'static Taxonomy {
        self.taxonomy
    }

    /// Score two favorites lists with this ranker's taxonomy
    pub fn score<S: AsRef<str>>(&self, user1_favorites: &[S], user2_favorites: &[S]) -> MatchResult {
        calculate_match_score(self.taxonomy, user1_favorites, user2_favorites)
    }

    /// Rank candidates for the user owning `my_favorites`
    ///
    /// # Arguments
    /// * `candidates` - Pool to rank, in the caller's order
    /// * `my_favorites` - The current user's favorites
    ///
    /// # Returns
    /// Every candidate, annotated and sorted best first
    pub fn rank<C>(&self, candidates: Vec<C>, my_favorites: &[String]) -> Vec<RankedCandidate<C>>
    where
        C: HasFavorites + Send,
    {
        let total = candidates.len();

        let mut ranked: Vec<(usize, RankedCandidate<C>)> = if total >= self.parallel_threshold {
            tracing::debug!("Scoring {} candidates in parallel", total);
            candidates
                .into_par_iter()
                .enumerate()
                .map(|(index, candidate)| (index, self.annotate(candidate, my_favorites)))
                .collect()
        } else {
            candidates
                .into_iter()
                .enumerate()
                .map(|(index, candidate)| (index, self.annotate(candidate, my_favorites)))
                .collect()
        };

        ranked.sort_by(|(index_a, a), (index_b, b)| {
            b.sort_priority
                .cmp(&a.sort_priority)
                .then_with(|| b.match_data.total_score.cmp(&a.match_data.total_score))
                .then_with(|| index_a.cmp(index_b))
        });

        ranked.into_iter().map(|(_, candidate)| candidate).collect()
    }

    fn annotate<C: HasFavorites>(&self, candidate: C, my_favorites: &[String]) -> RankedCandidate<C> {
        let match_data = self.score(my_favorites, candidate.favorites());
        let designation = match_designation(match_data.total_score, &match_data.exact_matches);
        let sort_priority = sort_priority(&match_data, designation.as_ref());

        RankedCandidate {
            candidate,
            match_data,
            designation,
            sort_priority,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}
