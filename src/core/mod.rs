// Core algorithm exports
pub mod matcher;
pub mod narrative;
pub mod overlap;
pub mod scoring;
pub mod transcript;

pub use matcher::{Matcher, RankResult};
pub use narrative::{build_match_card, build_narrative, build_twin_intro};
pub use scoring::{score, score_with_weights, Compatibility, ScoreBreakdown, SpeedMismatch};
pub use transcript::{simulate_transcript, SCRIPT_TURNS};
