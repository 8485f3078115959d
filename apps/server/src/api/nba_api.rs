//! Entry points that prefer the NBA-API sidecar over Ball Don't Lie.

use std::sync::Arc;

use crate::{
    api::players::SearchQuery,
    api::shared::{list_or_empty, require_param},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};

async fn list_teams(State(state): State<Arc<AppState>>) -> Response {
    list_or_empty(state.roster.alternate_teams().await)
}

async fn search_players(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Response> {
    let name = require_param(&query.name, "name")?;
    Ok(list_or_empty(state.roster.alternate_search_players(name).await))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/nba-api/teams", get(list_teams))
        .route("/nba-api/players/search", get(search_players))
}
