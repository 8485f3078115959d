use std::sync::Arc;

use crate::{api::shared::parse_id, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

/// Career team history by NBA Stats player id. No static fallback.
async fn get_player_teams(
    Path(player_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let player_id = parse_id(player_id.trim(), "playerId")?;

    match state.roster.career_teams(player_id).await {
        Ok(history) => Ok(Json(history).into_response()),
        Err(e) => {
            tracing::error!("Career lookup for {} failed: {}", player_id, e);
            let body = json!({
                "playerId": player_id,
                "teams": [],
                "seasons": 0,
                "error": e.to_string(),
            });
            Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response())
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/player-teams/{playerId}", get(get_player_teams))
}
