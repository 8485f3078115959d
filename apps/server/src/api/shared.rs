use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nba_grid_roster::RosterError;
use serde::Serialize;

use crate::error::ApiError;

/// A required query parameter, trimmed. Blank counts as missing.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn require_param<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, ApiError> {
    present(value)
        .ok_or_else(|| ApiError::BadRequest(format!("Missing required parameter: {}", name)))
}

pub fn parse_id(value: &str, name: &str) -> Result<i64, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("{} must be an integer, got '{}'", name, value)))
}

/// A list, or `500 []` when the chain had nothing left to try.
pub fn list_or_empty<T: Serialize>(result: Result<Vec<T>, RosterError>) -> Response {
    match result {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            tracing::error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::<T>::new())).into_response()
        }
    }
}
