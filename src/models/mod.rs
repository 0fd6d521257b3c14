// Model exports
pub mod domain;
pub mod profile;
pub mod requests;
pub mod responses;

pub use domain::{
    ordered_pair, CompatibilityLabel, MatchCard, MatchLike, MatchPair, MatchResult, Narrative,
    ScoredCandidate, ScoringWeights, SocialSpeed, Speaker, TranscriptResult, TranscriptTurn,
    TwinIntro, TwinProfile,
};
pub use profile::{
    migrate_legacy, AuraPersonality, AuraProfile, DatingProfile, LegacyProfile,
    MatchGenderPreference, MatchPreferences, MigrationError, ProfileDocument, RelationshipIntent,
};
pub use requests::{DiscoverRequest, LikeRequest, MatchesQuery, TranscriptRequest, TwinPairRequest};
pub use responses::{
    DiscoverResponse, ErrorResponse, HealthResponse, LikeResponse, MatchWithProfile,
    MatchesResponse,
};
