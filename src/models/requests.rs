use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::TwinProfile;

/// Two twins to compare
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinPairRequest {
    pub twin_a: TwinProfile,
    pub twin_b: TwinProfile,
}

/// Request to simulate a twin conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptRequest {
    pub twin_a: TwinProfile,
    pub twin_b: TwinProfile,
    #[serde(default)]
    pub max_turns: Option<usize>,
}

/// Request to rank the discover feed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscoverRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    #[serde(alias = "exclude_user_ids", rename = "excludeUserIds")]
    pub exclude_user_ids: Vec<String>,
}

/// Request to like another profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LikeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "target_user_id", rename = "targetUserId")]
    pub target_user_id: String,
}

/// Query string for listing a user's matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesQuery {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}
