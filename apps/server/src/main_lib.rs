use std::sync::Arc;

use crate::config::Config;
use nba_grid_roster::RosterService;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub roster: Arc<RosterService>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GRID_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let roster_config = config.roster_config();
    if roster_config.balldontlie_api_key.is_none() {
        tracing::warn!("GRID_BALLDONTLIE_API_KEY not set, Ball Don't Lie calls are unauthenticated");
    }
    tracing::info!(
        "Providers: balldontlie={} nba_api={} nba_stats={}",
        roster_config.balldontlie_url,
        roster_config.nba_api_url,
        roster_config.nba_stats_url
    );

    let roster = Arc::new(RosterService::new(roster_config));
    Ok(Arc::new(AppState { roster }))
}
