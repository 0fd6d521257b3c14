use crate::models::{
    AuraPersonality, AuraProfile, DatingProfile, MatchGenderPreference, MatchPreferences,
    RelationshipIntent, SocialSpeed,
};

struct DemoTwin<'a> {
    uid: &'a str,
    display_name: &'a str,
    country: &'a str,
    introversion_level: i32,
    goals: &'a [&'a str],
    vibe_words: &'a [&'a str],
    topics_like: &'a [&'a str],
    topics_avoid: &'a [&'a str],
    social_speed: SocialSpeed,
    hard_boundaries: &'a [&'a str],
    green_flags: &'a [&'a str],
    red_flags: &'a [&'a str],
    summary: &'a str,
    relationship_intent: RelationshipIntent,
    preferred_genders: MatchGenderPreference,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl DemoTwin<'_> {
    fn build(&self) -> AuraProfile {
        AuraProfile {
            id: self.uid.to_string(),
            user_id: self.uid.to_string(),
            display_name: self.display_name.to_string(),
            aura: AuraPersonality {
                introversion_level: self.introversion_level,
                goals: strings(self.goals),
                vibe_words: strings(self.vibe_words),
                topics_like: strings(self.topics_like),
                topics_avoid: strings(self.topics_avoid),
                social_speed: self.social_speed,
                hard_boundaries: strings(self.hard_boundaries),
                green_flags: strings(self.green_flags),
                red_flags: strings(self.red_flags),
                what_feels_safe: None,
                what_should_people_know: None,
                summary: self.summary.to_string(),
            },
            dating: DatingProfile {
                country: Some(self.country.to_string()),
                bio: Some(self.summary.to_string()),
                interests: strings(self.topics_like),
                relationship_intent: Some(self.relationship_intent),
                ..DatingProfile::default()
            },
            preferences: MatchPreferences {
                preferred_genders: self.preferred_genders,
                relationship_intent: Some(self.relationship_intent),
                ..MatchPreferences::default()
            },
            avatar_url: None,
        }
    }
}

/// Demo profiles for a fresh discover feed
pub fn demo_profiles() -> Vec<AuraProfile> {
    [
        DemoTwin {
            uid: "demo_lina",
            display_name: "Lina",
            country: "Germany",
            introversion_level: 6,
            goals: &["friends", "practice_talking"],
            vibe_words: &["thoughtful", "kind", "curious"],
            topics_like: &["art", "music", "late-night walks"],
            topics_avoid: &["politics"],
            social_speed: SocialSpeed::Slow,
            hard_boundaries: &["no explicit content", "no heavy drama"],
            green_flags: &["honesty", "emotional maturity"],
            red_flags: &["ghosting", "mocking others"],
            summary: "Quiet, gentle energy. Loves late-night walks, music, and people who move slowly.",
            relationship_intent: RelationshipIntent::OpenToSee,
            preferred_genders: MatchGenderPreference::Any,
        },
        DemoTwin {
            uid: "demo_samir",
            display_name: "Samir",
            country: "Turkey",
            introversion_level: 4,
            goals: &["friends", "serious_relationship"],
            vibe_words: &["warm", "protective", "sarcastic"],
            topics_like: &["football", "anime", "coffee shops"],
            topics_avoid: &["unnecessary drama"],
            social_speed: SocialSpeed::Normal,
            hard_boundaries: &["no yelling", "no ghosting"],
            green_flags: &["clear communication", "effort"],
            red_flags: &["games", "ego fights"],
            summary: "Warm but sarcastic, secretly soft. Loves quiet coffee dates and late-night Discord calls.",
            relationship_intent: RelationshipIntent::SeriousRelationship,
            preferred_genders: MatchGenderPreference::Women,
        },
        DemoTwin {
            uid: "demo_aya",
            display_name: "Aya",
            country: "Hungary",
            introversion_level: 8,
            goals: &["practice_talking"],
            vibe_words: &["shy", "observant", "sweet"],
            topics_like: &["books", "cozy games", "cats"],
            topics_avoid: &["loud parties"],
            social_speed: SocialSpeed::Slow,
            hard_boundaries: &["no pressure to call", "no yelling"],
            green_flags: &["patience", "gentle teasing"],
            red_flags: &["pushiness"],
            summary: "Soft introvert who prefers cozy nights, cats, and people who text gently.",
            relationship_intent: RelationshipIntent::FriendsOnly,
            preferred_genders: MatchGenderPreference::Any,
        },
    ]
    .iter()
    .map(DemoTwin::build)
    .collect()
}
