//! Roster service.
//!
//! Owns every piece of process-wide state (rate governor, caches, provider
//! chains, validator) and is constructed once at startup. Request handlers
//! share it behind an `Arc`.
//!
//! Chains:
//! - `primary`: Ball Don't Lie (rate gated) -> NBA-API sidecar -> static
//! - `alternate`: NBA-API sidecar -> static
//! - `career`: NBA Stats only, so a failure there surfaces to the caller

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};

use crate::cache::{CacheStore, CAREER_TTL, ROSTER_TTL};
use crate::errors::RosterError;
use crate::models::{
    CareerHistory, Player, PlayerId, RosterPayload, RosterQuery, Team, ValidationRequest,
    ValidationResult,
};
use crate::provider::balldontlie::{self, BallDontLieProvider};
use crate::provider::nba_api::{self, NbaApiProvider};
use crate::provider::nba_stats::{self, NbaStatsProvider};
use crate::provider::static_roster::StaticRosterProvider;
use crate::provider::{ProviderTier, RosterProvider};
use crate::registry::{
    ProviderChain, RateGovernor, Resolution, DEFAULT_ATTEMPT_TIMEOUT, MIN_API_INTERVAL,
};
use crate::validator::{PlayerLookup, PlayerValidator};

const TEAMS_KEY: &str = "teams";

/// Settings for building a [`RosterService`].
#[derive(Clone, Debug)]
pub struct RosterConfig {
    /// Minimum spacing between calls to the quota-limited provider.
    pub min_api_interval: Duration,
    /// Per-attempt timeout for every remote provider.
    pub provider_timeout: Duration,
    pub roster_ttl: Duration,
    pub career_ttl: Duration,
    /// `None` keeps validation results for the lifetime of the process.
    pub validation_ttl: Option<Duration>,
    pub balldontlie_url: String,
    pub balldontlie_api_key: Option<String>,
    pub nba_api_url: String,
    pub nba_stats_url: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            min_api_interval: MIN_API_INTERVAL,
            provider_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            roster_ttl: ROSTER_TTL,
            career_ttl: CAREER_TTL,
            validation_ttl: None,
            balldontlie_url: balldontlie::DEFAULT_BASE_URL.to_string(),
            balldontlie_api_key: None,
            nba_api_url: nba_api::DEFAULT_BASE_URL.to_string(),
            nba_stats_url: nba_stats::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Providers for each chain, in priority order.
#[derive(Default)]
pub struct ChainProviders {
    pub primary: Vec<Arc<dyn RosterProvider>>,
    pub alternate: Vec<Arc<dyn RosterProvider>>,
    pub career: Vec<Arc<dyn RosterProvider>>,
}

impl ChainProviders {
    /// The production wiring for `config`.
    pub fn from_config(config: &RosterConfig) -> Self {
        let balldontlie: Arc<dyn RosterProvider> = Arc::new(BallDontLieProvider::new(
            config.balldontlie_url.clone(),
            config.balldontlie_api_key.clone(),
            config.provider_timeout,
        ));
        let nba_api: Arc<dyn RosterProvider> = Arc::new(NbaApiProvider::new(
            config.nba_api_url.clone(),
            config.provider_timeout,
        ));
        let nba_stats: Arc<dyn RosterProvider> = Arc::new(NbaStatsProvider::new(
            config.nba_stats_url.clone(),
            config.provider_timeout,
        ));
        let fallback: Arc<dyn RosterProvider> = Arc::new(StaticRosterProvider::new());

        Self {
            primary: vec![balldontlie, nba_api.clone(), fallback.clone()],
            alternate: vec![nba_api, fallback],
            career: vec![nba_stats],
        }
    }
}

fn cache_key_for_name(name: &str) -> String {
    format!("players_{}", name.trim().to_lowercase())
}

fn into_players(chain: &ProviderChain, resolution: Resolution) -> Result<Vec<Player>, RosterError> {
    match resolution.payload {
        RosterPayload::Players(players) => Ok(players),
        _ => Err(RosterError::UnexpectedPayload {
            chain: chain.name().to_string(),
        }),
    }
}

fn into_teams(chain: &ProviderChain, resolution: Resolution) -> Result<Vec<Team>, RosterError> {
    match resolution.payload {
        RosterPayload::Teams(teams) => Ok(teams),
        _ => Err(RosterError::UnexpectedPayload {
            chain: chain.name().to_string(),
        }),
    }
}

/// Player search over the primary chain, shared with the validator.
struct PlayerDirectory {
    chain: Arc<ProviderChain>,
    cache: CacheStore<Vec<Player>>,
}

impl PlayerDirectory {
    async fn search(&self, name: &str) -> Result<Vec<Player>, RosterError> {
        let key = cache_key_for_name(name);
        if let Some(players) = self.cache.get(&key) {
            return Ok(players);
        }

        let resolution = self
            .chain
            .resolve(&RosterQuery::SearchPlayers(name.trim().to_string()))
            .await?;
        let tier = resolution.tier;
        let players = into_players(&self.chain, resolution)?;

        // Static answers are not cached so the next call can reach upstream.
        if tier == ProviderTier::Remote {
            self.cache.set(key, players.clone());
        }
        Ok(players)
    }
}

#[async_trait]
impl PlayerLookup for PlayerDirectory {
    async fn find_player(&self, full_name: &str) -> Result<Option<Player>, RosterError> {
        let mut players = self.search(full_name).await?;
        let exact = players
            .iter()
            .position(|p| p.full_name().eq_ignore_ascii_case(full_name.trim()));

        Ok(match exact {
            Some(index) => Some(players.swap_remove(index)),
            None => players.into_iter().next(),
        })
    }
}

/// Process-wide roster state and the operations built on it.
pub struct RosterService {
    governor: Arc<RateGovernor>,
    directory: Arc<PlayerDirectory>,
    alternate: ProviderChain,
    career: ProviderChain,
    teams: CacheStore<Vec<Team>>,
    careers: CacheStore<CareerHistory>,
    validator: PlayerValidator,
}

impl RosterService {
    pub fn new(config: RosterConfig) -> Self {
        let providers = ChainProviders::from_config(&config);
        Self::with_providers(config, providers)
    }

    pub fn with_providers(config: RosterConfig, providers: ChainProviders) -> Self {
        let governor = Arc::new(RateGovernor::with_interval(config.min_api_interval));
        let build = |name: &'static str, providers: Vec<Arc<dyn RosterProvider>>| {
            ProviderChain::new(name, providers, governor.clone())
                .with_attempt_timeout(config.provider_timeout)
        };

        let primary = Arc::new(build("primary", providers.primary));
        let alternate = build("alternate", providers.alternate);
        let career = build("career", providers.career);

        let directory = Arc::new(PlayerDirectory {
            chain: primary,
            cache: CacheStore::with_ttl("players", config.roster_ttl),
        });

        let results = match config.validation_ttl {
            Some(ttl) => CacheStore::with_ttl("validation", ttl),
            None => CacheStore::unbounded("validation"),
        };
        let validator = PlayerValidator::new(directory.clone(), results);

        info!(
            "Roster service ready: min API interval {:?}, provider timeout {:?}",
            config.min_api_interval, config.provider_timeout
        );

        Self {
            governor,
            directory,
            alternate,
            career,
            teams: CacheStore::with_ttl("teams", config.roster_ttl),
            careers: CacheStore::with_ttl("career", config.career_ttl),
            validator,
        }
    }

    pub fn governor(&self) -> &RateGovernor {
        &self.governor
    }

    /// All teams, preferring the live API.
    pub async fn teams(&self) -> Result<Vec<Team>, RosterError> {
        if let Some(teams) = self.teams.get(TEAMS_KEY) {
            return Ok(teams);
        }

        let chain = &self.directory.chain;
        let resolution = chain.resolve(&RosterQuery::Teams).await?;
        let tier = resolution.tier;
        let teams = into_teams(chain, resolution)?;

        if tier == ProviderTier::Remote {
            self.teams.set(TEAMS_KEY, teams.clone());
        }
        Ok(teams)
    }

    /// Players whose name contains `name`, preferring the live API.
    pub async fn search_players(&self, name: &str) -> Result<Vec<Player>, RosterError> {
        self.directory.search(name).await
    }

    /// All teams, preferring the NBA-API sidecar. Not cached.
    pub async fn alternate_teams(&self) -> Result<Vec<Team>, RosterError> {
        let resolution = self.alternate.resolve(&RosterQuery::Teams).await?;
        into_teams(&self.alternate, resolution)
    }

    /// Player search preferring the NBA-API sidecar. Not cached.
    pub async fn alternate_search_players(&self, name: &str) -> Result<Vec<Player>, RosterError> {
        let resolution = self
            .alternate
            .resolve(&RosterQuery::SearchPlayers(name.trim().to_string()))
            .await?;
        into_players(&self.alternate, resolution)
    }

    /// Career team history by NBA Stats player id.
    ///
    /// There is no static fallback for this lookup.
    pub async fn career_teams(&self, player_id: PlayerId) -> Result<CareerHistory, RosterError> {
        let key = format!("career_{}", player_id);
        if let Some(history) = self.careers.get(&key) {
            return Ok(history);
        }

        let resolution = self.career.resolve(&RosterQuery::CareerTeams(player_id)).await?;
        match resolution.payload {
            RosterPayload::Career(history) => {
                debug!(
                    "Career of {}: {} teams over {} seasons",
                    player_id,
                    history.teams.len(),
                    history.seasons
                );
                self.careers.set(key, history.clone());
                Ok(history)
            }
            _ => Err(RosterError::UnexpectedPayload {
                chain: self.career.name().to_string(),
            }),
        }
    }

    pub async fn validate(&self, request: &ValidationRequest) -> ValidationResult {
        self.validator.validate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ProviderError;
    use crate::models::ResolutionMethod;
    use crate::provider::ProviderCapabilities;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Remote provider that either fails or answers with a fixed roster.
    struct MockRemote {
        id: &'static str,
        rate_gated: bool,
        fail: bool,
        call_count: AtomicUsize,
    }

    impl MockRemote {
        fn new(id: &'static str, rate_gated: bool, fail: bool) -> Arc<Self> {
            Arc::new(Self {
                id,
                rate_gated,
                fail,
                call_count: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        fn check(&self) -> Result<(), ProviderError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ProviderError::Network {
                    provider: self.id.to_string(),
                    message: "connection refused".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl RosterProvider for MockRemote {
        fn id(&self) -> &'static str {
            self.id
        }

        fn capabilities(&self) -> ProviderCapabilities {
            ProviderCapabilities {
                tier: ProviderTier::Remote,
                rate_gated: self.rate_gated,
                supports_career: true,
            }
        }

        async fn list_teams(&self) -> Result<Vec<Team>, ProviderError> {
            self.check()?;
            Ok(vec![Team::new(14, "LAL", "Los Angeles Lakers")])
        }

        async fn search_players(&self, _name: &str) -> Result<Vec<Player>, ProviderError> {
            self.check()?;
            Ok(vec![
                Player {
                    id: 3,
                    first_name: "Bronny".to_string(),
                    last_name: "James".to_string(),
                    team: Some(Team::new(14, "LAL", "Los Angeles Lakers")),
                    draft_year: Some(2024),
                },
                Player {
                    id: 237,
                    first_name: "LeBron".to_string(),
                    last_name: "James".to_string(),
                    team: Some(Team::new(14, "LAL", "Los Angeles Lakers")),
                    draft_year: Some(2003),
                },
            ])
        }

        async fn career_teams(&self, player_id: PlayerId) -> Result<CareerHistory, ProviderError> {
            self.check()?;
            Ok(CareerHistory {
                player_id,
                teams: vec![6, 16, 14],
                seasons: 21,
            })
        }
    }

    fn service(primary: Arc<MockRemote>, secondary: Arc<MockRemote>) -> RosterService {
        let primary: Arc<dyn RosterProvider> = primary;
        let secondary: Arc<dyn RosterProvider> = secondary;
        let fallback: Arc<dyn RosterProvider> = Arc::new(StaticRosterProvider::new());
        let providers = ChainProviders {
            primary: vec![primary, secondary.clone(), fallback.clone()],
            alternate: vec![secondary.clone(), fallback],
            career: vec![secondary],
        };
        RosterService::with_providers(RosterConfig::default(), providers)
    }

    #[tokio::test]
    async fn test_remote_teams_are_cached() {
        let primary = MockRemote::new("PRIMARY", true, false);
        let secondary = MockRemote::new("SECONDARY", false, false);
        let service = service(primary.clone(), secondary.clone());

        let first = service.teams().await.unwrap();
        let second = service.teams().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_static_fallback_is_not_cached() {
        let primary = MockRemote::new("PRIMARY", true, true);
        let secondary = MockRemote::new("SECONDARY", false, true);
        let service = service(primary.clone(), secondary.clone());

        assert_eq!(service.teams().await.unwrap().len(), 30);
        assert_eq!(service.teams().await.unwrap().len(), 30);

        // The governor kept the primary away; the secondary was asked twice.
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 2);
    }

    #[tokio::test]
    async fn test_validation_prefers_exact_name_match() {
        let primary = MockRemote::new("PRIMARY", true, false);
        let secondary = MockRemote::new("SECONDARY", false, false);
        let service = service(primary, secondary);

        let result = service
            .validate(&ValidationRequest::new("LeBron", "James", 14, 16))
            .await;

        assert!(result.is_valid);
        assert_eq!(result.resolution_method, ResolutionMethod::Inference);

        let again = service
            .validate(&ValidationRequest::new("LeBron", "James", 14, 16))
            .await;
        assert_eq!(again.resolution_method, ResolutionMethod::Cache);
    }

    #[tokio::test]
    async fn test_validation_falls_back_to_static_roster() {
        let primary = MockRemote::new("PRIMARY", true, true);
        let secondary = MockRemote::new("SECONDARY", false, true);
        let service = service(primary, secondary);

        let result = service
            .validate(&ValidationRequest::new("LeBron", "James", 14, 6))
            .await;

        assert!(result.is_valid);
        assert_eq!(result.current_team_id, Some(14));
    }

    #[tokio::test]
    async fn test_alternate_skips_primary() {
        let primary = MockRemote::new("PRIMARY", true, false);
        let secondary = MockRemote::new("SECONDARY", false, false);
        let service = service(primary.clone(), secondary.clone());

        let players = service.alternate_search_players("james").await.unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(primary.calls(), 0);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_career_is_cached() {
        let primary = MockRemote::new("PRIMARY", true, false);
        let secondary = MockRemote::new("SECONDARY", false, false);
        let service = service(primary, secondary.clone());

        let history = service.career_teams(2544).await.unwrap();
        service.career_teams(2544).await.unwrap();

        assert_eq!(history.teams, vec![6, 16, 14]);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_career_failure_surfaces() {
        let primary = MockRemote::new("PRIMARY", true, false);
        let secondary = MockRemote::new("SECONDARY", false, true);
        let service = service(primary, secondary);

        assert!(matches!(
            service.career_teams(2544).await,
            Err(RosterError::AllProvidersFailed { .. })
        ));
    }

    #[test]
    fn test_player_cache_key_is_normalized() {
        assert_eq!(cache_key_for_name("  LeBron "), "players_lebron");
    }
}
