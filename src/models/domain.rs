use serde::{Deserialize, Serialize};

/// How quickly a user wants a new connection to develop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SocialSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialSpeed::Slow => "slow",
            SocialSpeed::Normal => "normal",
            SocialSpeed::Fast => "fast",
        }
    }
}

/// Read-only snapshot of one user's twin personality
///
/// Every list may be missing on the wire; missing lists deserialize as empty
/// and never fail scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinProfile {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub vibe_words: Vec<String>,
    #[serde(default)]
    pub topics_like: Vec<String>,
    #[serde(default)]
    pub topics_avoid: Vec<String>,
    #[serde(default)]
    pub social_speed: SocialSpeed,
    #[serde(default = "default_introversion_level")]
    pub introversion_level: i32,
    #[serde(default)]
    pub green_flags: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
}

pub(crate) fn default_introversion_level() -> i32 { 5 }

impl Default for TwinProfile {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            goals: Vec::new(),
            vibe_words: Vec::new(),
            topics_like: Vec::new(),
            topics_avoid: Vec::new(),
            social_speed: SocialSpeed::default(),
            introversion_level: default_introversion_level(),
            green_flags: Vec::new(),
            red_flags: Vec::new(),
        }
    }
}

impl TwinProfile {
    /// First vibe word, used as the "primary vibe" in generated prose
    pub fn primary_vibe(&self) -> Option<&str> {
        self.vibe_words.first().map(String::as_str)
    }

    pub fn primary_goal(&self) -> Option<&str> {
        self.goals.first().map(String::as_str)
    }

    pub fn primary_green_flag(&self) -> Option<&str> {
        self.green_flags.first().map(String::as_str)
    }
}

/// Three-tier qualitative bucket derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLabel {
    Low,
    Medium,
    High,
}

impl CompatibilityLabel {
    /// Hard thresholds: 70 and above is high, 40 up to 69 is medium
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            CompatibilityLabel::High
        } else if score >= 40 {
            CompatibilityLabel::Medium
        } else {
            CompatibilityLabel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityLabel::Low => "low",
            CompatibilityLabel::Medium => "medium",
            CompatibilityLabel::High => "high",
        }
    }

    /// Capitalized form shown on match cards
    pub fn title(&self) -> &'static str {
        match self {
            CompatibilityLabel::Low => "Low",
            CompatibilityLabel::Medium => "Medium",
            CompatibilityLabel::High => "High",
        }
    }
}

impl std::fmt::Display for CompatibilityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the compatibility scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub compatibility_score: u8,
    pub compatibility_label: CompatibilityLabel,
    pub match_reasons: Vec<String>,
    pub risk_flags: Vec<String>,
    pub suggested_opening_for_user_a: String,
    pub suggested_opening_for_user_b: String,
    pub aura_to_user_summary_a: String,
    pub aura_to_user_summary_b: String,
}

/// Human-readable explanation of a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub reasons: Vec<String>,
    pub risks: Vec<String>,
    pub opener_a: String,
    pub opener_b: String,
    pub summary_a: String,
    pub summary_b: String,
}

/// Presentation fields for a twin-to-twin match card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCard {
    pub compatibility_score: u8,
    pub match_label: String,
    pub summary: String,
    pub vibe_description: String,
    pub why_it_works: Vec<String>,
    pub watch_out: Vec<String>,
    pub suggested_first_message: String,
}

/// Scripted introduction between two twins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinIntro {
    pub title: String,
    pub aura_to_aura_script: Vec<String>,
    pub intro_summary: String,
    pub suggested_openers: Vec<String>,
    pub safety_notes: Vec<String>,
}

/// Which twin speaks a transcript turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    #[serde(rename = "auraA")]
    AuraA,
    #[serde(rename = "auraB")]
    AuraB,
}

impl Speaker {
    /// Twin A speaks on even turns, twin B on odd ones
    pub fn for_turn(index: usize) -> Self {
        if index % 2 == 0 {
            Speaker::AuraA
        } else {
            Speaker::AuraB
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub from: Speaker,
    pub text: String,
}

/// Deterministic twin conversation; same shape as the LLM-backed twin chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptResult {
    pub transcript: Vec<TranscriptTurn>,
    pub summary: String,
}

/// Candidate ranked for a viewer on the discover feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub user_id: String,
    pub display_name: String,
    pub compatibility_score: u8,
    pub compatibility_label: CompatibilityLabel,
    pub shared_topics: Vec<String>,
}

/// One-directional like
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchLike {
    pub from_uid: String,
    pub to_uid: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Mutual match, stored under the ordered pair `user_a < user_b`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPair {
    pub id: String,
    pub user_a: String,
    pub user_b: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub compatibility_score: Option<u8>,
}

impl MatchPair {
    pub fn key(&self) -> (String, String) {
        (self.user_a.clone(), self.user_b.clone())
    }

    /// The participant that is not `uid`
    pub fn other(&self, uid: &str) -> &str {
        if self.user_a == uid {
            &self.user_b
        } else {
            &self.user_a
        }
    }
}

/// Orders two user ids so a pair has one canonical key
pub fn ordered_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a < b { (a, b) } else { (b, a) }
}

/// Scoring weights
///
/// Every term of the additive compatibility formula, starting from `baseline`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub baseline: f64,
    pub goal: f64,
    pub vibe: f64,
    pub topic: f64,
    pub conflict: f64,
    pub introversion: f64,
    pub speed_clash: f64,
    pub speed_drift: f64,
    pub green_flag: f64,
    pub red_flag: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            baseline: 50.0,
            goal: 8.0,
            vibe: 6.0,
            topic: 4.0,
            conflict: 10.0,
            introversion: 2.0,
            speed_clash: 8.0,
            speed_drift: 2.0,
            green_flag: 3.0,
            red_flag: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(CompatibilityLabel::from_score(100), CompatibilityLabel::High);
        assert_eq!(CompatibilityLabel::from_score(70), CompatibilityLabel::High);
        assert_eq!(CompatibilityLabel::from_score(69), CompatibilityLabel::Medium);
        assert_eq!(CompatibilityLabel::from_score(40), CompatibilityLabel::Medium);
        assert_eq!(CompatibilityLabel::from_score(39), CompatibilityLabel::Low);
        assert_eq!(CompatibilityLabel::from_score(0), CompatibilityLabel::Low);
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let twin: TwinProfile = serde_json::from_str(r#"{"displayName":"Lina"}"#).unwrap();

        assert_eq!(twin.display_name, "Lina");
        assert!(twin.goals.is_empty());
        assert!(twin.vibe_words.is_empty());
        assert_eq!(twin.social_speed, SocialSpeed::Normal);
        assert_eq!(twin.introversion_level, 5);
    }

    #[test]
    fn test_speaker_wire_names() {
        let turn = TranscriptTurn { from: Speaker::for_turn(1), text: "hi".to_string() };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["from"], "auraB");
        assert_eq!(Speaker::for_turn(4), Speaker::AuraA);
    }

    #[test]
    fn test_ordered_pair() {
        assert_eq!(ordered_pair("b", "a"), ("a", "b"));
        assert_eq!(ordered_pair("a", "b"), ("a", "b"));
    }
}
