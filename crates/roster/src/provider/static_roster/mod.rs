//! Built-in roster provider.
//!
//! Always last in a chain. Team listing and player search cannot fail;
//! career history is not available from the static data.

mod dataset;

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::{Player, Team};
use crate::provider::{ProviderCapabilities, ProviderTier, RosterProvider};

use dataset::{STATIC_PLAYERS, STATIC_TEAMS};

pub const PROVIDER_ID: &str = "STATIC";

#[derive(Clone, Copy, Debug, Default)]
pub struct StaticRosterProvider;

impl StaticRosterProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn teams(&self) -> Vec<Team> {
        STATIC_TEAMS.clone()
    }

    /// Case-insensitive substring search over first, last and full name.
    pub fn search(&self, name: &str) -> Vec<Player> {
        STATIC_PLAYERS
            .iter()
            .filter(|p| p.matches_name(name))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl RosterProvider for StaticRosterProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            tier: ProviderTier::Static,
            rate_gated: false,
            supports_career: false,
        }
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ProviderError> {
        Ok(self.teams())
    }

    async fn search_players(&self, name: &str) -> Result<Vec<Player>, ProviderError> {
        Ok(self.search(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_teams_with_unique_abbreviations() {
        let teams = StaticRosterProvider::new().teams();
        assert_eq!(teams.len(), 30);

        let mut abbreviations: Vec<&str> = teams.iter().map(|t| t.abbreviation.as_str()).collect();
        abbreviations.sort();
        abbreviations.dedup();
        assert_eq!(abbreviations.len(), 30);
    }

    #[test]
    fn test_search_by_last_name() {
        let results = StaticRosterProvider::new().search("curry");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].full_name(), "Stephen Curry");
        assert_eq!(results[0].current_team_id(), Some(10));
    }

    #[test]
    fn test_search_by_full_name_case_insensitive() {
        let results = StaticRosterProvider::new().search("LEBRON JAMES");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1001);
    }

    #[test]
    fn test_search_matches_first_and_last_names() {
        // "James" is LeBron's last name and Harden's first name.
        let results = StaticRosterProvider::new().search("james");
        let ids: Vec<i64> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1001, 1016]);
    }

    #[tokio::test]
    async fn test_unknown_name_is_empty_success() {
        let provider = StaticRosterProvider::new();
        let results = provider.search_players("zzz nobody").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_career_not_supported() {
        let provider = StaticRosterProvider::new();
        let error = provider.career_teams(1001).await.unwrap_err();
        assert!(matches!(error, ProviderError::NotSupported { .. }));
    }
}
