use serde::{Deserialize, Serialize};

use crate::models::domain::{MatchPair, ScoredCandidate};
use crate::models::profile::AuraProfile;

/// Response for the discover endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverResponse {
    pub candidates: Vec<ScoredCandidate>,
    pub total_results: usize,
}

/// Response for the like endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub is_new_match: bool,
    pub match_id: Option<String>,
    pub event_id: String,
}

/// A match together with the other participant's profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWithProfile {
    #[serde(rename = "match")]
    pub pair: MatchPair,
    pub other: AuraProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesResponse {
    pub user_id: String,
    pub matches: Vec<MatchWithProfile>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub profiles: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
