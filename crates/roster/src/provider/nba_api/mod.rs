//! NBA-API sidecar provider.
//!
//! A small companion service (default `http://localhost:4001`) wrapping the
//! `nba_api` static tables. It has no upstream quota, so it is not rate
//! gated. It speaks NBA Stats team ids and reports unknown current teams
//! as a placeholder (`id 0`, `UNK`); both are normalized here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::errors::ProviderError;
use crate::models::{Player, Team};
use crate::provider::team_ids::canonical_team_id;
use crate::provider::{ProviderCapabilities, ProviderTier, RosterProvider};

pub const DEFAULT_BASE_URL: &str = "http://localhost:4001";
pub const PROVIDER_ID: &str = "NBA_API";

#[derive(Debug, Deserialize)]
struct SidecarTeam {
    id: i64,
    abbreviation: String,
    full_name: String,
}

impl SidecarTeam {
    fn into_team(self) -> Option<Team> {
        let id = canonical_team_id(self.id)?;
        Some(Team {
            id,
            abbreviation: self.abbreviation,
            full_name: self.full_name,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SidecarPlayer {
    id: i64,
    first_name: String,
    last_name: String,
    team: Option<SidecarTeam>,
    draft_year: Option<i32>,
}

impl From<SidecarPlayer> for Player {
    fn from(player: SidecarPlayer) -> Self {
        Player {
            id: player.id,
            first_name: player.first_name,
            last_name: player.last_name,
            team: player.team.and_then(SidecarTeam::into_team),
            draft_year: player.draft_year,
        }
    }
}

/// Client for the NBA-API sidecar.
pub struct NbaApiProvider {
    client: Client,
    base_url: String,
}

impl NbaApiProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("NBA-API request: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(params)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER_ID, e))?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Parse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
    }
}

fn normalize_teams(teams: Vec<SidecarTeam>) -> Vec<Team> {
    teams.into_iter().filter_map(SidecarTeam::into_team).collect()
}

#[async_trait]
impl RosterProvider for NbaApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            tier: ProviderTier::Remote,
            rate_gated: false,
            supports_career: false,
        }
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ProviderError> {
        let teams: Vec<SidecarTeam> = self.fetch("/nba-api/teams", &[]).await?;
        Ok(normalize_teams(teams))
    }

    async fn search_players(&self, name: &str) -> Result<Vec<Player>, ProviderError> {
        let players: Vec<SidecarPlayer> = self
            .fetch("/nba-api/players/search", &[("name", name)])
            .await?;
        Ok(players.into_iter().map(Player::from).collect())
    }
}
