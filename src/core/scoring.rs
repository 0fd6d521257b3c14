use crate::core::narrative::narrate;
use crate::core::overlap::{exact_overlap_count, intersects, overlap_count};
use crate::models::{CompatibilityLabel, MatchResult, ScoringWeights, SocialSpeed, TwinProfile};

/// Social-speed relationship between two twins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedMismatch {
    /// Same speed
    Aligned,
    /// Any mismatch other than slow against fast
    Drift,
    /// Exactly {slow, fast}
    Clash,
}

impl SpeedMismatch {
    pub fn between(a: SocialSpeed, b: SocialSpeed) -> Self {
        match (a, b) {
            _ if a == b => SpeedMismatch::Aligned,
            (SocialSpeed::Slow, SocialSpeed::Fast) | (SocialSpeed::Fast, SocialSpeed::Slow) => {
                SpeedMismatch::Clash
            }
            _ => SpeedMismatch::Drift,
        }
    }
}

/// Raw overlap counts and differences behind a compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub goal_overlap: usize,
    pub vibe_overlap: usize,
    pub like_overlap: usize,
    /// A likes something B avoids
    pub conflict_a_to_b: bool,
    /// B likes something A avoids
    pub conflict_b_to_a: bool,
    pub intro_diff: i64,
    pub speed: SpeedMismatch,
    pub green_resonance: usize,
    pub red_resonance: usize,
}

impl ScoreBreakdown {
    pub fn between(a: &TwinProfile, b: &TwinProfile) -> Self {
        let intro_diff =
            (i64::from(a.introversion_level) - i64::from(b.introversion_level)).abs();

        Self {
            goal_overlap: exact_overlap_count(&a.goals, &b.goals),
            vibe_overlap: overlap_count(&a.vibe_words, &b.vibe_words),
            like_overlap: overlap_count(&a.topics_like, &b.topics_like),
            conflict_a_to_b: intersects(&a.topics_like, &b.topics_avoid),
            conflict_b_to_a: intersects(&b.topics_like, &a.topics_avoid),
            intro_diff,
            speed: SpeedMismatch::between(a.social_speed, b.social_speed),
            green_resonance: overlap_count(&a.green_flags, &b.vibe_words)
                + overlap_count(&b.green_flags, &a.vibe_words),
            red_resonance: overlap_count(&a.red_flags, &b.vibe_words)
                + overlap_count(&b.red_flags, &a.vibe_words),
        }
    }

    pub fn has_topic_conflict(&self) -> bool {
        self.conflict_a_to_b || self.conflict_b_to_a
    }

    /// Unclamped additive score
    ///
    /// Each conflict direction is penalized on its own, while flag resonance
    /// sums both directions into one term.
    pub fn raw_score(&self, weights: &ScoringWeights) -> f64 {
        let mut score = weights.baseline;

        score += weights.goal * self.goal_overlap as f64;
        score += weights.vibe * self.vibe_overlap as f64;
        score += weights.topic * self.like_overlap as f64;

        if self.conflict_a_to_b {
            score -= weights.conflict;
        }
        if self.conflict_b_to_a {
            score -= weights.conflict;
        }

        score -= weights.introversion * self.intro_diff as f64;

        score -= match self.speed {
            SpeedMismatch::Aligned => 0.0,
            SpeedMismatch::Drift => weights.speed_drift,
            SpeedMismatch::Clash => weights.speed_clash,
        };

        score += weights.green_flag * self.green_resonance as f64;
        score -= weights.red_flag * self.red_resonance as f64;

        score
    }
}

/// Score, label and the counts they were derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compatibility {
    pub score: u8,
    pub label: CompatibilityLabel,
    pub breakdown: ScoreBreakdown,
}

impl Compatibility {
    pub fn assess(a: &TwinProfile, b: &TwinProfile, weights: &ScoringWeights) -> Self {
        let breakdown = ScoreBreakdown::between(a, b);
        let score = normalize_score(breakdown.raw_score(weights));

        tracing::trace!(
            "Scored {} x {}: {} ({:?})",
            a.display_name,
            b.display_name,
            score,
            breakdown
        );

        Self {
            score,
            label: CompatibilityLabel::from_score(score),
            breakdown,
        }
    }
}

/// Round to the nearest integer and clamp to 0-100
#[inline]
fn normalize_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Score two twins with the default weights
///
/// Pure and deterministic: identical inputs always produce identical results,
/// and the numeric score is symmetric in its arguments.
pub fn score(a: &TwinProfile, b: &TwinProfile) -> MatchResult {
    score_with_weights(a, b, &ScoringWeights::default())
}

pub fn score_with_weights(a: &TwinProfile, b: &TwinProfile, weights: &ScoringWeights) -> MatchResult {
    let compatibility = Compatibility::assess(a, b, weights);
    let narrative = narrate(a, b, &compatibility);

    MatchResult {
        compatibility_score: compatibility.score,
        compatibility_label: compatibility.label,
        match_reasons: narrative.reasons,
        risk_flags: narrative.risks,
        suggested_opening_for_user_a: narrative.opener_a,
        suggested_opening_for_user_b: narrative.opener_b,
        aura_to_user_summary_a: narrative.summary_a,
        aura_to_user_summary_b: narrative.summary_b,
    }
}
