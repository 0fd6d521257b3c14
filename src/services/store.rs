use std::collections::BTreeMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::models::{AuraProfile, MatchLike, MatchPair};

/// Errors that can occur when interacting with a profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store lock poisoned: {0}")]
    Poisoned(&'static str),
}

/// Keyed storage for profiles, likes and matches
///
/// Storage is injected into the match service so it can be exercised in
/// isolation and swapped for a persistent backend.
pub trait ProfileStore: Send + Sync {
    fn get_profile(&self, user_id: &str) -> Result<Option<AuraProfile>, StoreError>;

    /// Insert or replace the profile keyed by its `user_id`
    fn put_profile(&self, profile: AuraProfile) -> Result<(), StoreError>;

    fn list_profiles(&self) -> Result<Vec<AuraProfile>, StoreError>;

    /// Record a like; liking the same profile twice keeps the first record
    fn record_like(&self, like: MatchLike) -> Result<(), StoreError>;

    fn has_like(&self, from_uid: &str, to_uid: &str) -> Result<bool, StoreError>;

    /// Insert the match unless one already exists for the same ordered pair
    ///
    /// Returns the stored match and whether it was created by this call.
    fn upsert_match(&self, pair: MatchPair) -> Result<(MatchPair, bool), StoreError>;

    fn matches_for(&self, user_id: &str) -> Result<Vec<MatchPair>, StoreError>;
}

/// In-process store backed by ordered maps
#[derive(Debug, Default)]
pub struct InMemoryStore {
    profiles: RwLock<BTreeMap<String, AuraProfile>>,
    likes: RwLock<BTreeMap<(String, String), MatchLike>>,
    matches: RwLock<BTreeMap<(String, String), MatchPair>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: impl IntoIterator<Item = AuraProfile>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.profiles.write() {
            for profile in profiles {
                map.insert(profile.user_id.clone(), profile);
            }
        }
        store
    }
}

impl ProfileStore for InMemoryStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<AuraProfile>, StoreError> {
        let profiles = self.profiles.read().map_err(|_| StoreError::Poisoned("profiles"))?;
        Ok(profiles.get(user_id).cloned())
    }

    fn put_profile(&self, profile: AuraProfile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().map_err(|_| StoreError::Poisoned("profiles"))?;
        profiles.insert(profile.user_id.clone(), profile);
        Ok(())
    }

    fn list_profiles(&self) -> Result<Vec<AuraProfile>, StoreError> {
        let profiles = self.profiles.read().map_err(|_| StoreError::Poisoned("profiles"))?;
        Ok(profiles.values().cloned().collect())
    }

    fn record_like(&self, like: MatchLike) -> Result<(), StoreError> {
        let mut likes = self.likes.write().map_err(|_| StoreError::Poisoned("likes"))?;
        likes
            .entry((like.from_uid.clone(), like.to_uid.clone()))
            .or_insert(like);
        Ok(())
    }

    fn has_like(&self, from_uid: &str, to_uid: &str) -> Result<bool, StoreError> {
        let likes = self.likes.read().map_err(|_| StoreError::Poisoned("likes"))?;
        Ok(likes.contains_key(&(from_uid.to_string(), to_uid.to_string())))
    }

    fn upsert_match(&self, pair: MatchPair) -> Result<(MatchPair, bool), StoreError> {
        let mut matches = self.matches.write().map_err(|_| StoreError::Poisoned("matches"))?;

        match matches.get(&pair.key()) {
            Some(existing) => Ok((existing.clone(), false)),
            None => {
                matches.insert(pair.key(), pair.clone());
                Ok((pair, true))
            }
        }
    }

    fn matches_for(&self, user_id: &str) -> Result<Vec<MatchPair>, StoreError> {
        let matches = self.matches.read().map_err(|_| StoreError::Poisoned("matches"))?;
        Ok(matches
            .values()
            .filter(|pair| pair.user_a == user_id || pair.user_b == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn like(from: &str, to: &str) -> MatchLike {
        MatchLike {
            from_uid: from.to_string(),
            to_uid: to.to_string(),
            created_at: Utc::now(),
        }
    }

    fn pair(a: &str, b: &str, score: u8) -> MatchPair {
        MatchPair {
            id: format!("match_{}_{}", a, b),
            user_a: a.to_string(),
            user_b: b.to_string(),
            created_at: Utc::now(),
            compatibility_score: Some(score),
        }
    }

    #[test]
    fn test_likes_are_directional() {
        let store = InMemoryStore::new();
        store.record_like(like("a", "b")).unwrap();

        assert!(store.has_like("a", "b").unwrap());
        assert!(!store.has_like("b", "a").unwrap());
    }

    #[test]
    fn test_upsert_match_is_idempotent() {
        let store = InMemoryStore::new();

        let (first, created) = store.upsert_match(pair("a", "b", 60)).unwrap();
        assert!(created);
        assert_eq!(first.compatibility_score, Some(60));

        let (second, created) = store.upsert_match(pair("a", "b", 99)).unwrap();
        assert!(!created);
        assert_eq!(second.compatibility_score, Some(60));

        assert_eq!(store.matches_for("a").unwrap().len(), 1);
        assert_eq!(store.matches_for("b").unwrap().len(), 1);
        assert!(store.matches_for("c").unwrap().is_empty());
    }

    #[test]
    fn test_poisoned_lock_surfaces_as_error() {
        let store = std::sync::Arc::new(InMemoryStore::new());
        let writer = store.clone();

        let _ = std::thread::spawn(move || {
            let _guard = writer.profiles.write().unwrap();
            panic!("writer crashed while holding the lock");
        })
        .join();

        assert!(matches!(
            store.get_profile("a"),
            Err(StoreError::Poisoned("profiles"))
        ));
        assert!(store.has_like("a", "b").is_ok());
    }
}
