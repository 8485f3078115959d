use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use nba_grid_roster::provider::{balldontlie, nba_api, nba_stats};
use nba_grid_roster::RosterConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub balldontlie_url: String,
    pub balldontlie_api_key: Option<String>,
    pub nba_api_url: String,
    pub nba_stats_url: String,
    pub provider_timeout: Duration,
    pub min_api_interval: Duration,
    pub cache_ttl: Duration,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u64(key: &str, default: u64) -> anyhow::Result<u64> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {}", key, value)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("GRID_LISTEN_ADDR", "0.0.0.0:4000")
            .parse()
            .context("Invalid GRID_LISTEN_ADDR")?;
        let cors_allow = env_or("GRID_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let balldontlie_api_key = std::env::var("GRID_BALLDONTLIE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            listen_addr,
            cors_allow,
            balldontlie_url: env_or("GRID_BALLDONTLIE_URL", balldontlie::DEFAULT_BASE_URL),
            balldontlie_api_key,
            nba_api_url: env_or("GRID_NBA_API_URL", nba_api::DEFAULT_BASE_URL),
            nba_stats_url: env_or("GRID_NBA_STATS_URL", nba_stats::DEFAULT_BASE_URL),
            provider_timeout: Duration::from_millis(env_u64("GRID_PROVIDER_TIMEOUT_MS", 8000)?),
            min_api_interval: Duration::from_millis(env_u64("GRID_MIN_API_INTERVAL_MS", 12000)?),
            cache_ttl: Duration::from_secs(env_u64("GRID_CACHE_TTL_SECS", 300)?),
        })
    }

    pub fn roster_config(&self) -> RosterConfig {
        RosterConfig {
            min_api_interval: self.min_api_interval,
            provider_timeout: self.provider_timeout,
            roster_ttl: self.cache_ttl,
            career_ttl: self.cache_ttl,
            validation_ttl: None,
            balldontlie_url: self.balldontlie_url.clone(),
            balldontlie_api_key: self.balldontlie_api_key.clone(),
            nba_api_url: self.nba_api_url.clone(),
            nba_stats_url: self.nba_stats_url.clone(),
        }
    }
}
