//! Aura Twin - deterministic twin compatibility engine for the Aura Twin dating app
//!
//! The core scores two twin profiles, explains the score with template-driven
//! prose and simulates a scripted twin-to-twin conversation. The service
//! layer adds profile storage, a ranked discover feed and mutual matching.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    build_match_card, build_narrative, build_twin_intro, score, simulate_transcript, Matcher,
};
pub use models::{
    CompatibilityLabel, MatchResult, Narrative, ScoringWeights, SocialSpeed, Speaker,
    TranscriptResult, TwinProfile,
};
