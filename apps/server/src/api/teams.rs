use std::sync::Arc;

use crate::{api::shared::list_or_empty, main_lib::AppState};
use axum::{extract::State, response::Response, routing::get, Router};

/// All teams; falls back to the static roster when upstream is unavailable.
async fn list_teams(State(state): State<Arc<AppState>>) -> Response {
    list_or_empty(state.roster.teams().await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/teams", get(list_teams))
}
