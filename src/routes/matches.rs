use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::models::{
    DiscoverRequest, DiscoverResponse, ErrorResponse, HealthResponse, LikeRequest, LikeResponse,
    MatchesQuery, MatchesResponse, ProfileDocument, TranscriptRequest, TwinPairRequest,
};
use crate::services::{MatchService, MatchServiceError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MatchService>,
    pub matching: MatchingSettings,
}

/// Configure all compatibility and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score))
        .route("/compatibility/narrative", web::post().to(narrative))
        .route("/compatibility/card", web::post().to(card))
        .route("/compatibility/intro", web::post().to(intro))
        .route("/compatibility/transcript", web::post().to(transcript))
        .route("/profiles", web::put().to(save_profile))
        .route("/profiles/{user_id}", web::get().to(get_profile))
        .route("/discover", web::post().to(discover))
        .route("/likes", web::post().to(like))
        .route("/matches", web::get().to(list_matches));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn service_error(context: &str, err: MatchServiceError) -> HttpResponse {
    match err {
        MatchServiceError::UnknownUser(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: context.to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        MatchServiceError::SelfLike | MatchServiceError::Migration(_) => {
            HttpResponse::BadRequest().json(ErrorResponse {
                error: context.to_string(),
                message: err.to_string(),
                status_code: 400,
            })
        }
        MatchServiceError::Store(_) => {
            tracing::error!("{}: {}", context, err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: context.to_string(),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (status, profiles) = match state.service.profile_count() {
        Ok(count) => ("healthy", count),
        Err(e) => {
            tracing::warn!("Profile store unhealthy: {}", e);
            ("degraded", 0)
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        profiles,
        timestamp: chrono::Utc::now(),
    })
}

/// Score two twins
///
/// POST /api/v1/compatibility/score
///
/// Partial profiles are accepted as-is; out-of-range introversion levels
/// only pull the score toward the 0..=100 clamp.
///
/// Request body:
/// ```json
/// {
///   "twinA": { "displayName": "Lina", "vibeWords": ["calm"], "introversionLevel": 6 },
///   "twinB": { "displayName": "Aya", "socialSpeed": "slow" }
/// }
/// ```
async fn score(state: web::Data<AppState>, req: web::Json<TwinPairRequest>) -> impl Responder {
    let result = state.service.matcher().score(&req.twin_a, &req.twin_b);
    tracing::debug!(
        "Scored {} x {}: {} ({})",
        req.twin_a.display_name,
        req.twin_b.display_name,
        result.compatibility_score,
        result.compatibility_label
    );

    HttpResponse::Ok().json(result)
}

async fn narrative(state: web::Data<AppState>, req: web::Json<TwinPairRequest>) -> impl Responder {
    HttpResponse::Ok().json(state.service.matcher().narrative(&req.twin_a, &req.twin_b))
}

async fn card(state: web::Data<AppState>, req: web::Json<TwinPairRequest>) -> impl Responder {
    HttpResponse::Ok().json(state.service.matcher().card(&req.twin_a, &req.twin_b))
}

async fn intro(state: web::Data<AppState>, req: web::Json<TwinPairRequest>) -> impl Responder {
    HttpResponse::Ok().json(state.service.matcher().intro(&req.twin_a, &req.twin_b))
}

/// Simulate a scripted twin conversation
///
/// POST /api/v1/compatibility/transcript
///
/// `maxTurns` defaults to the configured transcript length.
async fn transcript(state: web::Data<AppState>, req: web::Json<TranscriptRequest>) -> impl Responder {
    let max_turns = req.max_turns.unwrap_or(state.matching.transcript_turns);
    HttpResponse::Ok().json(state.service.matcher().transcript(&req.twin_a, &req.twin_b, max_turns))
}

/// Store a profile
///
/// PUT /api/v1/profiles
///
/// Accepts layered documents and flat legacy documents; legacy documents are
/// migrated before they are stored. Responds with the stored layered profile.
async fn save_profile(state: web::Data<AppState>, req: web::Json<ProfileDocument>) -> impl Responder {
    let document = req.into_inner();
    if let Err(errors) = document.validate() {
        return validation_failed(errors);
    }

    match state.service.save_profile(document) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => service_error("Failed to store profile", e),
    }
}

async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.service.profile(&path) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => service_error("Failed to fetch profile", e),
    }
}

/// Rank the discover feed
///
/// POST /api/v1/discover
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20,
///   "excludeUserIds": ["string"]
/// }
/// ```
async fn discover(state: web::Data<AppState>, req: web::Json<DiscoverRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    // Cap limit to prevent oversized feeds
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    tracing::info!("Ranking discover feed for user: {}, limit: {}", req.user_id, limit);

    match state.service.discover(&req.user_id, &req.exclude_user_ids, limit) {
        Ok(result) => HttpResponse::Ok().json(DiscoverResponse {
            candidates: result.candidates,
            total_results: result.total_candidates,
        }),
        Err(e) => service_error("Failed to rank discover feed", e),
    }
}

/// Like another profile
///
/// POST /api/v1/likes
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "targetUserId": "string"
/// }
/// ```
async fn like(state: web::Data<AppState>, req: web::Json<LikeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.service.like(&req.user_id, &req.target_user_id) {
        Ok(outcome) => {
            tracing::debug!(
                "Recorded like {} -> {} (match: {})",
                req.user_id,
                req.target_user_id,
                outcome.is_new_match
            );

            HttpResponse::Ok().json(LikeResponse {
                is_new_match: outcome.is_new_match,
                match_id: outcome.pair.map(|pair| pair.id),
                event_id: uuid::Uuid::new_v4().to_string(),
            })
        }
        Err(e) => service_error("Failed to record like", e),
    }
}

/// List a user's matches
///
/// GET /api/v1/matches?userId={userId}
async fn list_matches(state: web::Data<AppState>, query: web::Query<MatchesQuery>) -> impl Responder {
    match state.service.matches(&query.user_id) {
        Ok(matches) => HttpResponse::Ok().json(MatchesResponse {
            user_id: query.user_id.clone(),
            count: matches.len(),
            matches,
        }),
        Err(e) => service_error("Failed to fetch matches", e),
    }
}
