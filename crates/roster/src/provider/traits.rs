//! Roster provider trait definitions.

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::{CareerHistory, Player, PlayerId, RosterPayload, RosterQuery, Team};

use super::capabilities::ProviderCapabilities;

/// Trait for roster data sources.
///
/// Implement this trait to add a source to a [`ProviderChain`]. Providers
/// report failures as [`ProviderError`]; the chain turns them into a
/// `Failure(reason)` and moves on, so an implementation never needs its own
/// fallback logic.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use nba_grid_roster::provider::{ProviderCapabilities, RosterProvider};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl RosterProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     fn capabilities(&self) -> ProviderCapabilities {
///         ProviderCapabilities::default()
///     }
///
///     // ... implement list_teams and search_players
/// }
/// ```
///
/// [`ProviderChain`]: crate::registry::ProviderChain
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// Unique identifier, e.g. "BALLDONTLIE". Used in logs and diagnostics.
    fn id(&self) -> &'static str;

    fn capabilities(&self) -> ProviderCapabilities;

    /// Fetch every team.
    async fn list_teams(&self) -> Result<Vec<Team>, ProviderError>;

    /// Fetch players whose name contains `name`.
    async fn search_players(&self, name: &str) -> Result<Vec<Player>, ProviderError>;

    /// Fetch the career team history of a player.
    ///
    /// Default implementation returns `NotSupported`.
    async fn career_teams(&self, player_id: PlayerId) -> Result<CareerHistory, ProviderError> {
        let _ = player_id;
        Err(ProviderError::NotSupported {
            operation: "career_teams".to_string(),
            provider: self.id().to_string(),
        })
    }

    /// Uniform entry point used by the chain.
    async fn fetch(&self, query: &RosterQuery) -> Result<RosterPayload, ProviderError> {
        match query {
            RosterQuery::Teams => self.list_teams().await.map(RosterPayload::Teams),
            RosterQuery::SearchPlayers(name) => {
                self.search_players(name).await.map(RosterPayload::Players)
            }
            RosterQuery::CareerTeams(player_id) => {
                self.career_teams(*player_id).await.map(RosterPayload::Career)
            }
        }
    }
}
