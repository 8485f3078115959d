use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use nba_grid_server::{api::app_router, build_state, config::Config, AppState};
use tower::ServiceExt;

// Nothing listens on port 1, so every remote provider fails fast.
const CLOSED_PORT: &str = "http://127.0.0.1:1";

fn build_test_app() -> (Router, Arc<AppState>) {
    for key in [
        "GRID_BALLDONTLIE_URL",
        "GRID_NBA_API_URL",
        "GRID_NBA_STATS_URL",
    ] {
        std::env::set_var(key, CLOSED_PORT);
    }
    std::env::set_var("GRID_PROVIDER_TIMEOUT_MS", "2000");

    let config = Config::from_env().unwrap();
    let state = build_state(&config).unwrap();
    let router = app_router(state.clone(), &config).unwrap();
    (router, state)
}

async fn get(app: &Router, uri: &str) -> (u16, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn healthz_sets_request_id() {
    let (app, _) = build_test_app();

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-request-id"));
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn healthz_echoes_incoming_request_id() {
    let (app, _) = build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn teams_fall_back_to_static_roster() {
    let (app, _) = build_test_app();

    let (status, teams) = get(&app, "/teams").await;

    assert_eq!(status, 200);
    assert_eq!(teams.as_array().unwrap().len(), 30);
    assert_eq!(teams[0]["abbreviation"], "ATL");
}

#[tokio::test]
async fn second_teams_call_skips_the_primary() {
    let (app, state) = build_test_app();

    let (first, _) = get(&app, "/teams").await;
    assert_eq!(first, 200);
    // The first call consumed the grant; the primary is now gated.
    assert!(!state.roster.governor().time_until_available().is_zero());

    let (second, teams) = get(&app, "/teams").await;
    assert_eq!(second, 200);
    assert_eq!(teams.as_array().unwrap().len(), 30);
    assert!(!state.roster.governor().try_acquire());
}

#[tokio::test]
async fn player_search_requires_name() {
    let (app, _) = build_test_app();

    let (status, body) = get(&app, "/players/search").await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);

    let (status, _) = get(&app, "/players/search?name=%20%20").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn player_search_uses_static_roster() {
    let (app, _) = build_test_app();

    let (status, players) = get(&app, "/players/search?name=curry").await;

    assert_eq!(status, 200);
    assert_eq!(players.as_array().unwrap().len(), 1);
    assert_eq!(players[0]["last_name"], "Curry");
}

#[tokio::test]
async fn validate_player_missing_team2_is_bad_request() {
    let (app, _) = build_test_app();

    let (status, body) = get(
        &app,
        "/validate-player?firstName=LeBron&lastName=James&team1Id=14",
    )
    .await;

    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().contains("team2Id"));
}

#[tokio::test]
async fn validate_player_rejects_non_numeric_team() {
    let (app, _) = build_test_app();

    let (status, _) = get(
        &app,
        "/validate-player?firstName=LeBron&lastName=James&team1Id=lakers&team2Id=6",
    )
    .await;

    assert_eq!(status, 400);
}

#[tokio::test]
async fn validate_player_second_call_is_cached() {
    let (app, _) = build_test_app();
    let uri = "/validate-player?firstName=LeBron&lastName=James&team1Id=14&team2Id=6";

    let (status, first) = get(&app, uri).await;
    assert_eq!(status, 200);
    assert_eq!(first["isValid"], true);
    assert_eq!(first["resolutionMethod"], "inference");

    let (status, second) = get(&app, uri).await;
    assert_eq!(status, 200);
    assert_eq!(second["resolutionMethod"], "cache");
    assert_eq!(second["isValid"], first["isValid"]);
    assert_eq!(second["historicalTeamIds"], first["historicalTeamIds"]);
}

#[tokio::test]
async fn validate_unknown_player_is_invalid() {
    let (app, _) = build_test_app();

    let (status, result) = get(
        &app,
        "/validate-player?firstName=Zzyzx&lastName=Nobody&team1Id=1&team2Id=2",
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(result["isValid"], false);
    assert_eq!(result["historicalTeamIds"], serde_json::json!([]));
}

#[tokio::test]
async fn player_teams_without_upstream_is_server_error() {
    let (app, _) = build_test_app();

    let (status, body) = get(&app, "/player-teams/2544").await;

    assert_eq!(status, 500);
    assert_eq!(body["playerId"], 2544);
    assert_eq!(body["teams"], serde_json::json!([]));
    assert_eq!(body["seasons"], 0);
}

#[tokio::test]
async fn player_teams_rejects_non_numeric_id() {
    let (app, _) = build_test_app();

    let (status, _) = get(&app, "/player-teams/lebron").await;

    assert_eq!(status, 400);
}

#[tokio::test]
async fn alternate_routes_fall_back_to_static_roster() {
    let (app, _) = build_test_app();

    let (status, teams) = get(&app, "/nba-api/teams").await;
    assert_eq!(status, 200);
    assert_eq!(teams.as_array().unwrap().len(), 30);

    let (status, players) = get(&app, "/nba-api/players/search?name=james").await;
    assert_eq!(status, 200);
    assert_eq!(players.as_array().unwrap().len(), 2);

    let (status, _) = get(&app, "/nba-api/players/search").await;
    assert_eq!(status, 400);
}
