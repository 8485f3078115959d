use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

mod nba_api;
mod player_teams;
mod players;
mod shared;
mod teams;
mod validation;

/// Every mounted read endpoint, logged at startup.
pub const ENDPOINTS: &[&str] = &[
    "/healthz",
    "/teams",
    "/players/search?name=",
    "/validate-player?firstName=&lastName=&team1Id=&team2Id=",
    "/player-teams/{playerId}",
    "/nba-api/teams",
    "/nba-api/players/search?name=",
];

pub async fn healthz() -> &'static str {
    "ok"
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new().allow_origin(origins)
    };

    let router = Router::new()
        .route("/healthz", get(healthz))
        .merge(teams::router())
        .merge(players::router())
        .merge(validation::router())
        .merge(player_teams::router())
        .merge(nba_api::router())
        .with_state(state)
        .layer(cors)
        // Set must wrap Propagate so a generated id reaches the response.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
