use crate::core::{
    narrative::{match_card, narrate, twin_intro},
    overlap::shared_in_order,
    scoring::{score_with_weights, Compatibility},
    transcript::transcript,
};
use crate::models::{
    AuraProfile, MatchCard, MatchResult, Narrative, ScoredCandidate, ScoringWeights,
    TranscriptResult, TwinIntro, TwinProfile,
};

/// Result of ranking a discover feed
#[derive(Debug)]
pub struct RankResult {
    pub candidates: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Compatibility engine bound to one set of scoring weights
///
/// Every presentation (score, narrative, card, intro, transcript) is derived
/// from the same assessment, so a service configured with custom weights
/// reports one consistent score everywhere.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn assess(&self, a: &TwinProfile, b: &TwinProfile) -> Compatibility {
        Compatibility::assess(a, b, &self.weights)
    }

    pub fn score(&self, a: &TwinProfile, b: &TwinProfile) -> MatchResult {
        score_with_weights(a, b, &self.weights)
    }

    pub fn narrative(&self, a: &TwinProfile, b: &TwinProfile) -> Narrative {
        narrate(a, b, &self.assess(a, b))
    }

    pub fn card(&self, a: &TwinProfile, b: &TwinProfile) -> MatchCard {
        match_card(a, b, &self.assess(a, b))
    }

    pub fn intro(&self, a: &TwinProfile, b: &TwinProfile) -> TwinIntro {
        twin_intro(a, b, &self.assess(a, b))
    }

    pub fn transcript(&self, a: &TwinProfile, b: &TwinProfile, max_turns: usize) -> TranscriptResult {
        transcript(a, b, &self.assess(a, b), max_turns)
    }

    /// Rank candidate profiles for a viewer
    ///
    /// # Arguments
    /// * `viewer` - The profile browsing the feed
    /// * `candidates` - All stored profiles
    /// * `exclude_user_ids` - Ids to drop besides the viewer's own
    /// * `limit` - Maximum number of candidates to return
    ///
    /// # Returns
    /// Candidates sorted by score (descending), then display name
    pub fn rank_candidates(
        &self,
        viewer: &AuraProfile,
        candidates: Vec<AuraProfile>,
        exclude_user_ids: &[String],
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();
        let viewer_twin = viewer.twin();

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|profile| profile.user_id != viewer.user_id)
            .filter(|profile| !exclude_user_ids.contains(&profile.user_id))
            .map(|profile| {
                let twin = profile.twin();
                let compatibility = self.assess(&viewer_twin, &twin);

                ScoredCandidate {
                    shared_topics: shared_in_order(&viewer_twin.topics_like, &twin.topics_like),
                    user_id: profile.user_id,
                    display_name: profile.display_name,
                    compatibility_score: compatibility.score,
                    compatibility_label: compatibility.label,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.compatibility_score
                .cmp(&a.compatibility_score)
                .then_with(|| a.display_name.cmp(&b.display_name))
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        scored.truncate(limit);

        RankResult {
            candidates: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuraPersonality, DatingProfile, MatchPreferences, SocialSpeed};

    fn profile(id: &str, name: &str, introversion: i32, topics: &[&str]) -> AuraProfile {
        AuraProfile {
            id: id.to_string(),
            user_id: id.to_string(),
            display_name: name.to_string(),
            aura: AuraPersonality {
                introversion_level: introversion,
                goals: vec!["friends".to_string()],
                vibe_words: vec![],
                topics_like: topics.iter().map(|s| s.to_string()).collect(),
                topics_avoid: vec![],
                social_speed: SocialSpeed::Normal,
                hard_boundaries: vec![],
                green_flags: vec![],
                red_flags: vec![],
                what_feels_safe: None,
                what_should_people_know: None,
                summary: String::new(),
            },
            dating: DatingProfile::default(),
            preferences: MatchPreferences::default(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_rank_excludes_viewer_and_sorts() {
        let matcher = Matcher::with_default_weights();
        let viewer = profile("me", "Me", 5, &["art"]);

        let candidates = vec![
            profile("me", "Me", 5, &["art"]),
            profile("far", "Far", 10, &[]),
            profile("close", "Close", 5, &["Art"]),
            profile("mid", "Mid", 6, &[]),
        ];

        let result = matcher.rank_candidates(&viewer, candidates, &[], 10);

        assert_eq!(result.total_candidates, 4);
        let ids: Vec<&str> = result.candidates.iter().map(|c| c.user_id.as_str()).collect();
        assert_eq!(ids, vec!["close", "mid", "far"]);
        assert_eq!(result.candidates[0].shared_topics, vec!["art"]);
    }

    #[test]
    fn test_rank_respects_exclusions_and_limit() {
        let matcher = Matcher::with_default_weights();
        let viewer = profile("me", "Me", 5, &[]);

        let candidates: Vec<AuraProfile> = (0..20)
            .map(|i| profile(&format!("u{}", i), &format!("User {}", i), 1 + i % 10, &[]))
            .collect();

        let result = matcher.rank_candidates(&viewer, candidates, &["u5".to_string()], 5);

        assert_eq!(result.candidates.len(), 5);
        assert!(result.candidates.iter().all(|c| c.user_id != "u5"));
        for pair in result.candidates.windows(2) {
            assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
        }
    }

    #[test]
    fn test_custom_weights_flow_into_every_view() {
        let matcher = Matcher::new(ScoringWeights {
            baseline: 90.0,
            ..ScoringWeights::default()
        });
        let a = profile("a", "A", 5, &[]).twin();
        let b = profile("b", "B", 5, &[]).twin();

        // 90 + 8 for the shared goal
        assert_eq!(matcher.score(&a, &b).compatibility_score, 98);
        assert_eq!(matcher.card(&a, &b).match_label, "High");
        assert!(matcher.transcript(&a, &b, 6).summary.contains("High (98/100)"));
    }
}
