use std::sync::Arc;

use crate::{
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
use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct SearchQuery {
    pub(super) name: Option<String>,
}

async fn search_players(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Response> {
    let name = require_param(&query.name, "name")?;
    Ok(list_or_empty(state.roster.search_players(name).await))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/players/search", get(search_players))
}
