//! Player/team-pair validation.
//!
//! Answers "has this player played for both teams?" in a linear pipeline:
//! cache, current-team lookup, inference, decision, store. A failed lookup
//! yields the invalid error-fallback result, which is never cached.

mod inference;

pub use inference::InferenceTable;

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::cache::CacheStore;
use crate::errors::RosterError;
use crate::models::{Player, ResolutionMethod, ValidationRequest, ValidationResult};

/// Finds the player a validation request is about.
#[async_trait]
pub trait PlayerLookup: Send + Sync {
    /// `Ok(None)` when no provider knows the name.
    async fn find_player(&self, full_name: &str) -> Result<Option<Player>, RosterError>;
}

pub struct PlayerValidator {
    results: CacheStore<ValidationResult>,
    lookup: Arc<dyn PlayerLookup>,
    inference: InferenceTable,
}

impl PlayerValidator {
    pub fn new(lookup: Arc<dyn PlayerLookup>, results: CacheStore<ValidationResult>) -> Self {
        Self {
            results,
            lookup,
            inference: InferenceTable::new(),
        }
    }

    pub fn cached_results(&self) -> usize {
        self.results.len()
    }

    /// Decide whether the player has played for both requested teams.
    ///
    /// Every answer except the error fallback is cached for the life of the
    /// process. That includes answers built from a degraded provider, such as
    /// a sidecar player with no known team or a static roster hit.
    pub async fn validate(&self, request: &ValidationRequest) -> ValidationResult {
        let key = request.cache_key();

        if let Some(cached) = self.results.get(&key) {
            return cached.from_cache();
        }

        let full_name = request.full_name();
        let player = match self.lookup.find_player(&full_name).await {
            Ok(player) => player,
            Err(e) => {
                warn!("Validation of '{}' failed: {}", full_name, e);
                return ValidationResult::error_fallback(request);
            }
        };

        let current_team_id = player.as_ref().and_then(Player::current_team_id);
        let mut historical_team_ids = BTreeSet::new();
        let mut method = ResolutionMethod::Provider;

        match current_team_id {
            Some(team_id) => {
                historical_team_ids.insert(team_id);
                if let Some(prior) = self.inference.prior_teams(team_id, &full_name) {
                    debug!("Inferred {} prior teams for '{}'", prior.len(), full_name);
                    historical_team_ids.extend(prior.iter().copied());
                    method = ResolutionMethod::Inference;
                }
            }
            None => {
                info!("No current team known for '{}'", full_name);
            }
        }

        let result =
            ValidationResult::evaluate(request, current_team_id, historical_team_ids, method);
        self.results.set(key, result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockLookup {
        player: Option<Player>,
        fail: bool,
        call_count: AtomicUsize,
    }

    impl MockLookup {
        fn returning(player: Option<Player>) -> Self {
            Self {
                player,
                fail: false,
                call_count: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                player: None,
                fail: true,
                call_count: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PlayerLookup for MockLookup {
        async fn find_player(&self, _full_name: &str) -> Result<Option<Player>, RosterError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RosterError::NoProviders {
                    chain: "primary".to_string(),
                });
            }
            Ok(self.player.clone())
        }
    }

    fn player(first: &str, last: &str, team_id: Option<i64>) -> Player {
        Player {
            id: 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            team: team_id.map(|id| Team::new(id, "TST", "Test Team")),
            draft_year: None,
        }
    }

    fn validator(lookup: Arc<MockLookup>) -> PlayerValidator {
        PlayerValidator::new(lookup, CacheStore::unbounded("validation"))
    }

    #[tokio::test]
    async fn test_inference_makes_pair_valid() {
        let lookup = Arc::new(MockLookup::returning(Some(player("LeBron", "James", Some(14)))));
        let validator = validator(lookup);

        let result = validator
            .validate(&ValidationRequest::new("LeBron", "James", 14, 6))
            .await;

        assert!(result.is_valid);
        assert_eq!(result.current_team_id, Some(14));
        assert_eq!(result.historical_team_ids, BTreeSet::from([6, 14, 16]));
        assert_eq!(result.resolution_method, ResolutionMethod::Inference);
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let lookup = Arc::new(MockLookup::returning(Some(player("LeBron", "James", Some(14)))));
        let validator = validator(lookup.clone());
        let request = ValidationRequest::new("LeBron", "James", 14, 6);

        let first = validator.validate(&request).await;
        let second = validator.validate(&request).await;

        assert_eq!(lookup.calls(), 1);
        assert_eq!(second.resolution_method, ResolutionMethod::Cache);
        assert_eq!(second.historical_team_ids, first.historical_team_ids);
        assert_eq!(second.is_valid, first.is_valid);
    }

    #[tokio::test]
    async fn test_without_inference_entry_only_current_team_counts() {
        let lookup = Arc::new(MockLookup::returning(Some(player("Stephen", "Curry", Some(10)))));
        let validator = validator(lookup);

        let result = validator
            .validate(&ValidationRequest::new("Stephen", "Curry", 10, 14))
            .await;

        assert!(!result.is_valid);
        assert_eq!(result.historical_team_ids, BTreeSet::from([10]));
        assert_eq!(result.resolution_method, ResolutionMethod::Provider);

        let same_team = validator
            .validate(&ValidationRequest::new("Stephen", "Curry", 10, 10))
            .await;
        assert!(same_team.is_valid);
    }

    #[tokio::test]
    async fn test_unknown_player_is_invalid() {
        let lookup = Arc::new(MockLookup::returning(None));
        let validator = validator(lookup);

        let result = validator
            .validate(&ValidationRequest::new("Nobody", "Here", 1, 2))
            .await;

        assert!(!result.is_valid);
        assert_eq!(result.current_team_id, None);
        assert!(result.historical_team_ids.is_empty());
    }

    #[tokio::test]
    async fn test_teamless_answer_is_cached() {
        let lookup = Arc::new(MockLookup::returning(Some(player("LeBron", "James", None))));
        let validator = validator(lookup.clone());
        let request = ValidationRequest::new("LeBron", "James", 14, 6);

        let first = validator.validate(&request).await;
        let second = validator.validate(&request).await;

        assert!(!first.is_valid);
        assert_eq!(first.current_team_id, None);
        assert_eq!(second.resolution_method, ResolutionMethod::Cache);
        assert!(!second.is_valid);
        assert_eq!(lookup.calls(), 1);
        assert_eq!(validator.cached_results(), 1);
    }

    #[tokio::test]
    async fn test_lookup_error_is_not_cached() {
        let lookup = Arc::new(MockLookup::failing());
        let validator = validator(lookup.clone());
        let request = ValidationRequest::new("LeBron", "James", 14, 6);

        let first = validator.validate(&request).await;
        let second = validator.validate(&request).await;

        assert_eq!(first.resolution_method, ResolutionMethod::ErrorFallback);
        assert!(!first.is_valid);
        assert_eq!(second.resolution_method, ResolutionMethod::ErrorFallback);
        assert_eq!(lookup.calls(), 2);
        assert_eq!(validator.cached_results(), 0);
    }
}
