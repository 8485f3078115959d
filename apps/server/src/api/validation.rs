use std::sync::Arc;

use crate::{
    api::shared::{parse_id, present},
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use nba_grid_roster::{ResolutionMethod, ValidationRequest};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateQuery {
    first_name: Option<String>,
    last_name: Option<String>,
    team1_id: Option<String>,
    team2_id: Option<String>,
}

impl ValidateQuery {
    fn into_request(self) -> ApiResult<ValidationRequest> {
        let params = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("team1Id", &self.team1_id),
            ("team2Id", &self.team2_id),
        ];
        let missing: Vec<&str> = params
            .iter()
            .filter(|(_, value)| present(value).is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ApiError::BadRequest(format!(
                "Missing required parameters: {}",
                missing.join(", ")
            )));
        }

        let first_name = present(&self.first_name).unwrap_or_default();
        let last_name = present(&self.last_name).unwrap_or_default();
        let team1_id = parse_id(present(&self.team1_id).unwrap_or_default(), "team1Id")?;
        let team2_id = parse_id(present(&self.team2_id).unwrap_or_default(), "team2Id")?;

        Ok(ValidationRequest::new(
            first_name, last_name, team1_id, team2_id,
        ))
    }
}

/// Has the player played for both teams? 500 only for the error fallback.
async fn validate_player(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ValidateQuery>,
) -> ApiResult<Response> {
    let request = query.into_request()?;
    let result = state.roster.validate(&request).await;

    let status = if result.resolution_method == ResolutionMethod::ErrorFallback {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };
    Ok((status, Json(result)).into_response())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/validate-player", get(validate_player))
}
