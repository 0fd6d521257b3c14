use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{default_introversion_level, SocialSpeed, TwinProfile};

/// Errors raised while migrating a stored profile document
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipIntent {
    FriendsOnly,
    CasualDating,
    SeriousRelationship,
    OpenToSee,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchGenderPreference {
    #[default]
    Any,
    Women,
    Men,
    WomenAndMen,
    LgbtqPlus,
}

/// Personality layer of a profile: everything the scorer reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuraPersonality {
    #[serde(default = "default_introversion_level")]
    pub introversion_level: i32,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub vibe_words: Vec<String>,
    #[serde(default)]
    pub topics_like: Vec<String>,
    #[serde(default)]
    pub topics_avoid: Vec<String>,
    #[serde(default = "default_stored_speed")]
    pub social_speed: SocialSpeed,
    #[serde(default)]
    pub hard_boundaries: Vec<String>,
    #[serde(default)]
    pub green_flags: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub what_feels_safe: Option<String>,
    #[serde(default)]
    pub what_should_people_know: Option<String>,
    #[serde(default)]
    pub summary: String,
}

/// What other users see on the dating card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatingProfile {
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub ideal_first_message: Option<String>,
    #[serde(default)]
    pub relationship_intent: Option<RelationshipIntent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPreferences {
    #[serde(default)]
    pub preferred_genders: MatchGenderPreference,
    #[serde(default = "default_min_age")]
    pub min_age: u8,
    #[serde(default = "default_max_age")]
    pub max_age: u8,
    #[serde(default)]
    pub relationship_intent: Option<RelationshipIntent>,
}

/// Stored profiles without a pace start slow
fn default_stored_speed() -> SocialSpeed { SocialSpeed::Slow }

fn default_min_age() -> u8 { 18 }
fn default_max_age() -> u8 { 40 }

impl Default for MatchPreferences {
    fn default() -> Self {
        Self {
            preferred_genders: MatchGenderPreference::default(),
            min_age: default_min_age(),
            max_age: default_max_age(),
            relationship_intent: None,
        }
    }
}

/// Layered (schema v2) profile document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuraProfile {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub display_name: String,
    pub aura: AuraPersonality,
    #[serde(default)]
    pub dating: DatingProfile,
    #[serde(default)]
    pub preferences: MatchPreferences,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl AuraProfile {
    /// Project the snapshot the compatibility engine consumes
    pub fn twin(&self) -> TwinProfile {
        TwinProfile {
            display_name: self.display_name.clone(),
            goals: self.aura.goals.clone(),
            vibe_words: self.aura.vibe_words.clone(),
            topics_like: self.aura.topics_like.clone(),
            topics_avoid: self.aura.topics_avoid.clone(),
            social_speed: self.aura.social_speed,
            introversion_level: self.aura.introversion_level,
            green_flags: self.aura.green_flags.clone(),
            red_flags: self.aura.red_flags.clone(),
        }
    }
}

/// Flat (schema v1) profile document with aura fields at the root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub introversion_level: Option<i32>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub vibe_words: Vec<String>,
    #[serde(default)]
    pub topics_like: Vec<String>,
    #[serde(default)]
    pub topics_avoid: Vec<String>,
    #[serde(default)]
    pub social_speed: Option<SocialSpeed>,
    #[serde(default)]
    pub hard_boundaries: Vec<String>,
    #[serde(default)]
    pub green_flags: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub what_feels_safe: Option<String>,
    #[serde(default)]
    pub what_should_people_know: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub relationship_intent: Option<RelationshipIntent>,
    #[serde(default)]
    pub preferred_match_gender: Option<MatchGenderPreference>,
    #[serde(default)]
    pub ideal_first_message: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Any profile document the store accepts
///
/// A document carrying an `aura` key is layered and must parse as one; its
/// parse errors are reported rather than retried as legacy. Everything else
/// is read as a flat legacy document and migrated on the way in.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfileDocument {
    Layered(AuraProfile),
    Legacy(LegacyProfile),
}

/// Personality keys a layered document may still carry at its root
const PERSONALITY_KEYS: &[&str] = &[
    "introversionLevel",
    "goals",
    "vibeWords",
    "topicsLike",
    "topicsAvoid",
    "socialSpeed",
    "hardBoundaries",
    "greenFlags",
    "redFlags",
    "whatFeelsSafe",
    "whatShouldPeopleKnow",
    "summary",
];

/// Fill gaps in a layered document: `userId` falls back to `id`, and
/// personality keys missing from `aura` fall back to the root.
fn complete_layered(doc: &mut Map<String, Value>) {
    if !doc.contains_key("userId") {
        if let Some(id) = doc.get("id").cloned() {
            doc.insert("userId".to_string(), id);
        }
    }

    let fallbacks: Vec<(String, Value)> = PERSONALITY_KEYS
        .iter()
        .filter_map(|key| doc.get(*key).map(|value| (key.to_string(), value.clone())))
        .filter(|(_, value)| !value.is_null())
        .collect();

    if let Some(aura) = doc.get_mut("aura").and_then(Value::as_object_mut) {
        for (key, value) in fallbacks {
            aura.entry(key).or_insert(value);
        }
    }
}

impl<'de> Deserialize<'de> for ProfileDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = Value::deserialize(deserializer)?;

        let layered = value.get("aura").is_some_and(|aura| !aura.is_null());
        if layered {
            if let Some(doc) = value.as_object_mut() {
                complete_layered(doc);
            }
            AuraProfile::deserialize(value)
                .map(ProfileDocument::Layered)
                .map_err(de::Error::custom)
        } else {
            LegacyProfile::deserialize(value)
                .map(ProfileDocument::Legacy)
                .map_err(de::Error::custom)
        }
    }
}

impl ProfileDocument {
    pub fn into_current(self) -> Result<AuraProfile, MigrationError> {
        match self {
            ProfileDocument::Layered(profile) => Ok(profile),
            ProfileDocument::Legacy(legacy) => migrate_legacy(legacy),
        }
    }
}

impl Validate for ProfileDocument {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            ProfileDocument::Layered(profile) => profile.validate(),
            // identity is checked during migration
            ProfileDocument::Legacy(_) => Ok(()),
        }
    }
}

/// Migrate a flat v1 document into the layered v2 shape
pub fn migrate_legacy(legacy: LegacyProfile) -> Result<AuraProfile, MigrationError> {
    if legacy.id.trim().is_empty() {
        return Err(MigrationError::MissingField("id"));
    }
    if legacy.display_name.trim().is_empty() {
        return Err(MigrationError::MissingField("displayName"));
    }

    let summary = legacy.summary.unwrap_or_default();
    let interests = if legacy.interests.is_empty() {
        legacy.topics_like.clone()
    } else {
        legacy.interests
    };

    let aura = AuraPersonality {
        introversion_level: legacy
            .introversion_level
            .unwrap_or_else(default_introversion_level),
        goals: legacy.goals,
        vibe_words: legacy.vibe_words,
        topics_like: legacy.topics_like,
        topics_avoid: legacy.topics_avoid,
        social_speed: legacy.social_speed.unwrap_or_else(default_stored_speed),
        hard_boundaries: legacy.hard_boundaries,
        green_flags: legacy.green_flags,
        red_flags: legacy.red_flags,
        what_feels_safe: legacy.what_feels_safe,
        what_should_people_know: legacy.what_should_people_know,
        summary: summary.clone(),
    };

    let dating = DatingProfile {
        date_of_birth: None,
        country: legacy.country,
        city: None,
        bio: (!summary.is_empty()).then_some(summary),
        interests,
        ideal_first_message: legacy.ideal_first_message,
        relationship_intent: legacy.relationship_intent,
    };

    let preferences = MatchPreferences {
        preferred_genders: legacy.preferred_match_gender.unwrap_or_default(),
        relationship_intent: legacy.relationship_intent,
        ..MatchPreferences::default()
    };

    Ok(AuraProfile {
        user_id: legacy.user_id.unwrap_or_else(|| legacy.id.clone()),
        id: legacy.id,
        display_name: legacy.display_name,
        aura,
        dating,
        preferences,
        avatar_url: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_document_is_migrated() {
        let doc: ProfileDocument = serde_json::from_str(
            r#"{
                "id": "demo_lina",
                "displayName": "Lina",
                "introversionLevel": 6,
                "goals": ["friends"],
                "vibeWords": ["thoughtful"],
                "topicsLike": ["art", "music"],
                "socialSpeed": "slow",
                "summary": "Quiet, gentle energy."
            }"#,
        )
        .unwrap();

        assert!(matches!(doc, ProfileDocument::Legacy(_)));

        let profile = doc.into_current().unwrap();
        assert_eq!(profile.user_id, "demo_lina");
        assert_eq!(profile.aura.introversion_level, 6);
        assert_eq!(profile.aura.social_speed, SocialSpeed::Slow);
        assert_eq!(profile.dating.interests, vec!["art", "music"]);
        assert_eq!(profile.dating.bio.as_deref(), Some("Quiet, gentle energy."));
    }

    #[test]
    fn test_layered_document_passes_through() {
        let doc: ProfileDocument = serde_json::from_str(
            r#"{
                "id": "p1",
                "userId": "u1",
                "displayName": "Aya",
                "aura": {"introversionLevel": 8, "vibeWords": ["shy"]}
            }"#,
        )
        .unwrap();

        let profile = doc.into_current().unwrap();
        assert_eq!(profile.user_id, "u1");
        assert_eq!(profile.twin().primary_vibe(), Some("shy"));
        assert_eq!(profile.preferences.min_age, 18);
    }

    #[test]
    fn test_migration_requires_identity() {
        let legacy = LegacyProfile {
            display_name: "Nameless".to_string(),
            ..LegacyProfile::default()
        };
        assert!(matches!(migrate_legacy(legacy), Err(MigrationError::MissingField("id"))));

        let legacy = LegacyProfile { id: "x".to_string(), ..LegacyProfile::default() };
        assert!(matches!(
            migrate_legacy(legacy),
            Err(MigrationError::MissingField("displayName"))
        ));
    }

    #[test]
    fn test_legacy_document_without_speed_migrates_slow() {
        let doc: ProfileDocument =
            serde_json::from_str(r#"{"id": "x", "displayName": "X"}"#).unwrap();

        let profile = doc.into_current().unwrap();
        assert_eq!(profile.aura.social_speed, SocialSpeed::Slow);
        assert_eq!(profile.aura.introversion_level, 5);
    }

    #[test]
    fn test_layered_document_without_user_id_keeps_personality() {
        let doc: ProfileDocument = serde_json::from_str(
            r#"{
                "id": "p1",
                "displayName": "Aya",
                "aura": {
                    "introversionLevel": 8,
                    "vibeWords": ["shy"],
                    "socialSpeed": "fast",
                    "topicsLike": ["cats"]
                }
            }"#,
        )
        .unwrap();

        assert!(matches!(doc, ProfileDocument::Layered(_)));

        let profile = doc.into_current().unwrap();
        assert_eq!(profile.user_id, "p1");
        assert_eq!(profile.aura.introversion_level, 8);
        assert_eq!(profile.aura.vibe_words, vec!["shy"]);
        assert_eq!(profile.aura.social_speed, SocialSpeed::Fast);
        assert_eq!(profile.aura.topics_like, vec!["cats"]);
    }

    #[test]
    fn test_layered_document_with_bad_speed_is_an_error() {
        let result = serde_json::from_str::<ProfileDocument>(
            r#"{
                "id": "p1",
                "userId": "u1",
                "displayName": "Aya",
                "aura": {"vibeWords": ["shy"], "socialSpeed": "Slow"}
            }"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_layered_document_falls_back_to_root_personality() {
        let doc: ProfileDocument = serde_json::from_str(
            r#"{
                "id": "p1",
                "userId": "u1",
                "displayName": "Aya",
                "vibeWords": ["ignored"],
                "goals": ["friends"],
                "aura": {"vibeWords": ["shy"]}
            }"#,
        )
        .unwrap();

        let profile = doc.into_current().unwrap();
        assert_eq!(profile.aura.vibe_words, vec!["shy"]);
        assert_eq!(profile.aura.goals, vec!["friends"]);
        assert_eq!(profile.aura.social_speed, SocialSpeed::Slow);
    }

    #[test]
    fn test_layered_document_requires_display_name() {
        let doc: ProfileDocument = serde_json::from_str(
            r#"{"id": "p1", "userId": "u1", "displayName": "", "aura": {}}"#,
        )
        .unwrap();

        assert!(doc.validate().is_err());
    }
}
