use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::core::{Matcher, RankResult};
use crate::models::{
    ordered_pair, AuraProfile, MatchLike, MatchPair, MatchWithProfile, MigrationError,
    ProfileDocument,
};
use crate::services::store::{ProfileStore, StoreError};

/// Errors raised by the like/match service
#[derive(Debug, Error)]
pub enum MatchServiceError {
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("A user cannot like their own profile")]
    SelfLike,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),
}

/// Outcome of a like
#[derive(Debug, Clone)]
pub struct LikeOutcome {
    /// True whenever the like is reciprocated
    pub is_new_match: bool,
    pub pair: Option<MatchPair>,
}

/// Discover, like and match flows over an injected profile store
pub struct MatchService {
    store: Arc<dyn ProfileStore>,
    matcher: Matcher,
}

impl MatchService {
    pub fn new(store: Arc<dyn ProfileStore>, matcher: Matcher) -> Self {
        Self { store, matcher }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn profile_count(&self) -> Result<usize, MatchServiceError> {
        Ok(self.store.list_profiles()?.len())
    }

    /// Store a profile document, migrating legacy documents first
    pub fn save_profile(&self, document: ProfileDocument) -> Result<AuraProfile, MatchServiceError> {
        let profile = document.into_current()?;
        self.store.put_profile(profile.clone())?;
        tracing::debug!("Stored profile {} ({})", profile.user_id, profile.display_name);
        Ok(profile)
    }

    pub fn profile(&self, user_id: &str) -> Result<AuraProfile, MatchServiceError> {
        self.store
            .get_profile(user_id)?
            .ok_or_else(|| MatchServiceError::UnknownUser(user_id.to_string()))
    }

    /// Rank every stored profile for `user_id`
    pub fn discover(
        &self,
        user_id: &str,
        exclude_user_ids: &[String],
        limit: usize,
    ) -> Result<RankResult, MatchServiceError> {
        let viewer = self.profile(user_id)?;
        let candidates = self.store.list_profiles()?;

        let result = self
            .matcher
            .rank_candidates(&viewer, candidates, exclude_user_ids, limit);

        tracing::debug!(
            "Ranked {} of {} profiles for {}",
            result.candidates.len(),
            result.total_candidates,
            user_id
        );

        Ok(result)
    }

    /// Record a like and create the match when it is reciprocated
    ///
    /// The match is keyed by the ordered pair, so repeated mutual likes
    /// return the existing match instead of creating another.
    pub fn like(&self, user_id: &str, target_user_id: &str) -> Result<LikeOutcome, MatchServiceError> {
        if user_id == target_user_id {
            return Err(MatchServiceError::SelfLike);
        }

        let liker = self.profile(user_id)?;
        let target = self.profile(target_user_id)?;

        self.store.record_like(MatchLike {
            from_uid: user_id.to_string(),
            to_uid: target_user_id.to_string(),
            created_at: Utc::now(),
        })?;

        if !self.store.has_like(target_user_id, user_id)? {
            return Ok(LikeOutcome {
                is_new_match: false,
                pair: None,
            });
        }

        let (user_a, user_b) = ordered_pair(user_id, target_user_id);
        let (twin_a, twin_b) = if user_a == liker.user_id {
            (liker.twin(), target.twin())
        } else {
            (target.twin(), liker.twin())
        };
        let score = self.matcher.assess(&twin_a, &twin_b).score;

        let (pair, created) = self.store.upsert_match(MatchPair {
            id: format!("match_{}_{}", user_a, user_b),
            user_a: user_a.to_string(),
            user_b: user_b.to_string(),
            created_at: Utc::now(),
            compatibility_score: Some(score),
        })?;

        if created {
            tracing::info!("New match {} (score {})", pair.id, score);
        }

        Ok(LikeOutcome {
            is_new_match: true,
            pair: Some(pair),
        })
    }

    /// Matches for `user_id`, each joined with the other user's profile
    ///
    /// Matches whose counterpart profile has disappeared are skipped.
    pub fn matches(&self, user_id: &str) -> Result<Vec<MatchWithProfile>, MatchServiceError> {
        let mut result = Vec::new();

        for pair in self.store.matches_for(user_id)? {
            let other_id = pair.other(user_id).to_string();
            match self.store.get_profile(&other_id)? {
                Some(other) => result.push(MatchWithProfile { pair, other }),
                None => tracing::warn!("Match {} references missing profile {}", pair.id, other_id),
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed::demo_profiles;
    use crate::services::store::InMemoryStore;

    fn service() -> MatchService {
        let store = Arc::new(InMemoryStore::with_profiles(demo_profiles()));
        MatchService::new(store, Matcher::with_default_weights())
    }

    #[test]
    fn test_one_sided_like_is_not_a_match() {
        let service = service();
        let outcome = service.like("demo_lina", "demo_aya").unwrap();

        assert!(!outcome.is_new_match);
        assert!(service.matches("demo_lina").unwrap().is_empty());
    }

    #[test]
    fn test_mutual_like_creates_one_match() {
        let service = service();
        service.like("demo_samir", "demo_lina").unwrap();
        let outcome = service.like("demo_lina", "demo_samir").unwrap();

        assert!(outcome.is_new_match);
        let pair = outcome.pair.unwrap();
        assert_eq!(pair.user_a, "demo_lina");
        assert_eq!(pair.user_b, "demo_samir");

        // Liking again keeps the original match
        let again = service.like("demo_samir", "demo_lina").unwrap();
        assert_eq!(again.pair.unwrap().id, pair.id);

        let matches = service.matches("demo_samir").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].other.user_id, "demo_lina");
    }

    #[test]
    fn test_rejects_self_and_unknown_likes() {
        let service = service();
        assert!(matches!(service.like("demo_aya", "demo_aya"), Err(MatchServiceError::SelfLike)));
        assert!(matches!(
            service.like("demo_aya", "ghost"),
            Err(MatchServiceError::UnknownUser(id)) if id == "ghost"
        ));
    }

    #[test]
    fn test_discover_excludes_viewer() {
        let service = service();
        let result = service.discover("demo_aya", &[], 10).unwrap();

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.candidates.len(), 2);
        assert!(result.candidates.iter().all(|c| c.user_id != "demo_aya"));
    }
}
