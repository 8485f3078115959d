//! Ball Don't Lie provider implementation.
//!
//! The primary live source for teams and player search:
//! - Teams via /teams
//! - Player search via /players?search=
//!
//! The free tier allows 5 calls per minute, so this provider is gated by the
//! rate governor. API documentation: https://docs.balldontlie.io

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::ProviderError;
use crate::models::{Player, Team};
use crate::provider::{ProviderCapabilities, ProviderTier, RosterProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.balldontlie.io/v1";
pub const PROVIDER_ID: &str = "BALLDONTLIE";

/// Every list endpoint wraps its rows in `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: Vec<T>,
}

/// Ball Don't Lie provider.
pub struct BallDontLieProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl BallDontLieProvider {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Make a GET request and return the body of a 2xx response.
    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, ProviderError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.client.get(&url).query(params);
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", api_key);
        }

        debug!("Ball Don't Lie request: {} with {} params", endpoint, params.len());

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER_ID, e))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Ball Don't Lie {} returned {}: {}", endpoint, status, body);
            return Err(ProviderError::Status {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER_ID, e))
    }
}

/// Decode the rows of a `{ data: [...] }` body.
fn parse_data<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ProviderError> {
    serde_json::from_str::<DataEnvelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ProviderError::Parse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
}

#[async_trait]
impl RosterProvider for BallDontLieProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            tier: ProviderTier::Remote,
            rate_gated: true,
            supports_career: false,
        }
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ProviderError> {
        let body = self.fetch("/teams", &[]).await?;
        parse_data(&body)
    }

    async fn search_players(&self, name: &str) -> Result<Vec<Player>, ProviderError> {
        let body = self.fetch("/players", &[("search", name)]).await?;
        parse_data(&body)
    }
}
