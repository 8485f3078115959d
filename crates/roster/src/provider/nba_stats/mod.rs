//! NBA Stats provider for career team history.
//!
//! Reads `playerprofilev2` and extracts the regular-season rows. The stats
//! site rejects requests that do not look like they come from nba.com, so
//! the browser headers below are required, not cosmetic.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::ProviderError;
use crate::models::{CareerHistory, Player, PlayerId, Team, TeamId};
use crate::provider::team_ids::canonical_team_id;
use crate::provider::{ProviderCapabilities, ProviderTier, RosterProvider};

pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";
pub const PROVIDER_ID: &str = "NBA_STATS";

const SEASON_TOTALS: &str = "SeasonTotalsRegularSeason";
const TEAM_ID_HEADER: &str = "TEAM_ID";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    result_sets: Vec<ResultSet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultSet {
    name: String,
    headers: Vec<String>,
    row_set: Vec<Vec<Value>>,
}

/// NBA Stats career history provider.
pub struct NbaStatsProvider {
    client: Client,
    base_url: String,
}

impl NbaStatsProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(Self::browser_headers())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn browser_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            ),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        headers.insert("Origin", HeaderValue::from_static("https://www.nba.com"));
        headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));
        headers
    }

    fn unsupported(&self, operation: &str) -> ProviderError {
        ProviderError::NotSupported {
            operation: operation.to_string(),
            provider: PROVIDER_ID.to_string(),
        }
    }
}

/// Distinct canonical team ids (first-seen order) and the season row count.
///
/// A profile without regular-season totals is an empty history, not an error.
fn parse_career(player_id: PlayerId, body: &str) -> Result<CareerHistory, ProviderError> {
    let profile: ProfileResponse = serde_json::from_str(body).map_err(|e| ProviderError::Parse {
        provider: PROVIDER_ID.to_string(),
        message: e.to_string(),
    })?;

    let Some(totals) = profile.result_sets.into_iter().find(|rs| rs.name == SEASON_TOTALS) else {
        info!("No {} for player {}", SEASON_TOTALS, player_id);
        return Ok(CareerHistory::empty(player_id));
    };

    let team_index = totals
        .headers
        .iter()
        .position(|h| h == TEAM_ID_HEADER)
        .ok_or_else(|| ProviderError::Parse {
            provider: PROVIDER_ID.to_string(),
            message: format!("{} has no {} column", SEASON_TOTALS, TEAM_ID_HEADER),
        })?;

    let mut teams: Vec<TeamId> = Vec::new();
    for row in &totals.row_set {
        let Some(id) = row.get(team_index).and_then(Value::as_i64).and_then(canonical_team_id)
        else {
            continue;
        };
        if !teams.contains(&id) {
            teams.push(id);
        }
    }

    Ok(CareerHistory {
        player_id,
        teams,
        seasons: totals.row_set.len() as u32,
    })
}

#[async_trait]
impl RosterProvider for NbaStatsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            tier: ProviderTier::Remote,
            rate_gated: false,
            supports_career: true,
        }
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ProviderError> {
        Err(self.unsupported("list_teams"))
    }

    async fn search_players(&self, _name: &str) -> Result<Vec<Player>, ProviderError> {
        Err(self.unsupported("search_players"))
    }

    async fn career_teams(&self, player_id: PlayerId) -> Result<CareerHistory, ProviderError> {
        let url = format!("{}/playerprofilev2", self.base_url);
        let player_id_param = player_id.to_string();
        debug!("NBA Stats profile request for player {}", player_id);

        let response = self
            .client
            .get(&url)
            .query(&[("PlayerID", player_id_param.as_str())])
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

        parse_career(player_id, &body)
    }
}
