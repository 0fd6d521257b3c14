// Service exports
pub mod match_service;
pub mod seed;
pub mod store;

pub use match_service::{LikeOutcome, MatchService, MatchServiceError};
pub use seed::demo_profiles;
pub use store::{InMemoryStore, ProfileStore, StoreError};
