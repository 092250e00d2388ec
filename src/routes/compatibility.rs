use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::RankingSettings;
use crate::core::{detect_vibe, match_designation, match_details, parse_favorites, InputError, Ranker};
use crate::models::{
    DetectVibeRequest, DetectVibeResponse, ErrorResponse, HealthResponse, MatchingPattern,
    RankRequest, RankResponse, ScoreRequest, ScoreResponse,
};
use crate::services::{AnalyticsSink, CompatibilityCache};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
    pub cache: Arc<CompatibilityCache>,
    pub analytics: Option<Arc<dyn AnalyticsSink>>,
    pub ranking: RankingSettings,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score_favorites))
        .route("/compatibility/rank", web::post().to(rank_candidates))
        .route("/compatibility/vibe", web::post().to(detect_favorites_vibe));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn invalid_input(e: &InputError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid favorites".to_string(),
        message: e.to_string(),
        status_code: 400,
    })
}

fn validation_failed(errors: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Score two favorites lists
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "user1Favorites": ["coffee", "hiking"],
///   "user2Favorites": ["coffee", "camping"],
///   "user1Id": "optional",
///   "user2Id": "optional"
/// }
/// ```
async fn score_favorites(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {:?}", errors);
        return validation_failed(&errors);
    }

    let (user1_favorites, user2_favorites) = match req.favorites() {
        Ok(lists) => lists,
        Err(e) => {
            tracing::info!("Rejected score request: {}", e);
            return invalid_input(&e);
        }
    };

    let ranker = state.ranker;
    let match_data = state
        .cache
        .get_or_compute(&user1_favorites, &user2_favorites, || {
            ranker.score(&user1_favorites, &user2_favorites)
        })
        .await;

    let designation = match_designation(match_data.total_score, &match_data.exact_matches);
    let details = match_details(&match_data);

    if let (Some(sink), Some(user1_id), Some(user2_id)) =
        (&state.analytics, &req.user1_id, &req.user2_id)
    {
        let pattern = MatchingPattern::new(
            user1_id.as_str(),
            user2_id.as_str(),
            &user1_favorites,
            &user2_favorites,
            &match_data,
        );
        if let Err(e) = sink.record(&pattern) {
            tracing::warn!("Failed to record matching pattern {}: {}", pattern.id, e);
        }
    }

    tracing::debug!(
        "Scored favorites: score={}, designation={:?}",
        match_data.total_score,
        designation.as_ref().map(|d| d.kind)
    );

    HttpResponse::Ok().json(ScoreResponse {
        match_data,
        designation,
        details,
    })
}

/// Rank a candidate pool
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// {
///   "myFavorites": ["coffee", "hiking"],
///   "candidates": [{"user_id": "...", "favorites": ["..."]}],
///   "limit": 20
/// }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return validation_failed(&errors);
    }

    let limit = state.ranking.effective_limit(req.limit);

    let (my_favorites, candidates) = match req.into_inner().into_parts() {
        Ok(parts) => parts,
        Err(e) => {
            tracing::info!("Rejected rank request: {}", e);
            return invalid_input(&e);
        }
    };

    let total_candidates = candidates.len();
    tracing::info!("Ranking {} candidates, limit: {}", total_candidates, limit);

    let ranker = state.ranker;
    let mut ranked = match web::block(move || ranker.rank(candidates, &my_favorites)).await {
        Ok(ranked) => ranked,
        Err(e) => {
            tracing::error!("Ranking task failed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Ranking failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    ranked.truncate(limit);

    tracing::info!(
        "Returning {} ranked candidates (from {})",
        ranked.len(),
        total_candidates
    );

    HttpResponse::Ok().json(RankResponse {
        candidates: ranked,
        total_candidates,
    })
}

/// Detect the dominant vibe of a favorites list
///
/// POST /api/v1/compatibility/vibe
async fn detect_favorites_vibe(
    state: web::Data<AppState>,
    req: web::Json<DetectVibeRequest>,
) -> impl Responder {
    let favorites = match parse_favorites(req.favorites.as_ref()) {
        Ok(favorites) => favorites,
        Err(e) => return invalid_input(&e),
    };

    let vibe = detect_vibe(state.ranker.taxonomy(), &favorites);

    HttpResponse::Ok().json(DetectVibeResponse { vibe })
}
