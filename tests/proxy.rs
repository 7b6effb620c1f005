//! Proxy endpoint tests against a mocked upstream API.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mockito::{Matcher, ServerGuard};
use serde_json::{json, Value};
use val_career_tracker::proxy::{
    match_handler, matches_handler, mmr_handler, mmr_history_handler, AppState,
};
use val_career_tracker::HenrikClient;

const API_KEY: &str = "test-key";

fn state_for(base_url: &str) -> AppState {
    AppState {
        client: Arc::new(HenrikClient::with_base_url(base_url, API_KEY, 5).unwrap()),
    }
}

fn query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn player_query() -> Query<HashMap<String, String>> {
    query(&[("region", "eu"), ("name", "TenZ"), ("tag", "NA1")])
}

async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Catch-all mock that must never be hit.
async fn deny_all(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await
}

#[tokio::test]
async fn mmr_without_tag_is_rejected_before_any_upstream_call() {
    let mut server = mockito::Server::new_async().await;
    let upstream = deny_all(&mut server).await;
    let state = state_for(&server.url());

    let resp = mmr_handler(State(state), query(&[("region", "eu"), ("name", "TenZ")]))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Missing region, name, or tag");
    upstream.assert_async().await;
}

#[tokio::test]
async fn empty_parameter_counts_as_missing() {
    let mut server = mockito::Server::new_async().await;
    let upstream = deny_all(&mut server).await;
    let state = state_for(&server.url());

    let resp = mmr_history_handler(
        State(state),
        query(&[("region", "eu"), ("name", ""), ("tag", "NA1")]),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "Missing region, name, or tag");
    upstream.assert_async().await;
}

#[tokio::test]
async fn matches_without_region_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let upstream = deny_all(&mut server).await;
    let state = state_for(&server.url());

    let resp = matches_handler(State(state), query(&[("name", "TenZ"), ("tag", "NA1")]))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "Missing region, name, or tag");
    upstream.assert_async().await;
}

#[tokio::test]
async fn match_detail_without_matchid_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let upstream = deny_all(&mut server).await;
    let state = state_for(&server.url());

    let resp = match_handler(State(state), query(&[("region", "eu")]))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "Missing region or matchid");
    upstream.assert_async().await;
}

#[tokio::test]
async fn successful_upstream_body_is_relayed_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let payload = json!({
        "data": { "current_data": { "currenttier_patched": "Gold 2", "ranking_in_tier": 45 } },
        "unrelated": [1, 2, 3]
    });
    let upstream = server
        .mock("GET", "/valorant/v2/mmr/eu/TenZ/NA1")
        .match_header("authorization", API_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(payload.to_string())
        .create_async()
        .await;
    let state = state_for(&server.url());

    let resp = mmr_handler(State(state), player_query()).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, payload);
    upstream.assert_async().await;
}

#[tokio::test]
async fn upstream_error_status_is_relayed_with_its_body() {
    let mut server = mockito::Server::new_async().await;
    let payload = json!({ "status": 404, "errors": [{ "message": "player not found" }] });
    let upstream = server
        .mock("GET", "/valorant/v1/mmr-history/eu/TenZ/NA1")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(payload.to_string())
        .create_async()
        .await;
    let state = state_for(&server.url());

    let resp = mmr_history_handler(State(state), player_query())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, payload);
    upstream.assert_async().await;
}

#[tokio::test]
async fn upstream_rate_limit_is_normalized_whatever_the_body_says() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", Matcher::Any)
        .with_status(429)
        .with_body("slow down")
        .expect(4)
        .create_async()
        .await;
    let state = state_for(&server.url());

    let responses = [
        mmr_handler(State(state.clone()), player_query())
            .await
            .into_response(),
        mmr_history_handler(State(state.clone()), player_query())
            .await
            .into_response(),
        matches_handler(State(state.clone()), player_query())
            .await
            .into_response(),
        match_handler(
            State(state),
            query(&[("region", "eu"), ("matchid", "abc-123")]),
        )
        .await
        .into_response(),
    ];

    for resp in responses {
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body_json(resp).await["error"],
            "Rate limit exceeded. Please try again later."
        );
    }
    upstream.assert_async().await;
}

#[tokio::test]
async fn unreachable_upstream_yields_internal_server_error() {
    // Nothing listens here; the connect fails immediately.
    let state = state_for("http://127.0.0.1:9");

    let resp = mmr_handler(State(state), player_query()).await.into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await["error"], "Internal Server Error");
}

#[tokio::test]
async fn non_json_upstream_body_yields_internal_server_error() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", "/valorant/v3/matches/eu/TenZ/NA1")
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;
    let state = state_for(&server.url());

    let resp = matches_handler(State(state), player_query())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await["error"], "Internal Server Error");
    upstream.assert_async().await;
}

#[tokio::test]
async fn player_name_is_percent_encoded_in_the_upstream_path() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", "/valorant/v2/mmr/eu/Player%20One/NA1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": {} }).to_string())
        .create_async()
        .await;
    let state = state_for(&server.url());

    let resp = mmr_handler(
        State(state),
        query(&[("region", "eu"), ("name", "Player One"), ("tag", "NA1")]),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    upstream.assert_async().await;
}

#[tokio::test]
async fn match_detail_uses_the_region_qualified_upstream_path() {
    let mut server = mockito::Server::new_async().await;
    let payload = json!({ "data": { "players": [] } });
    let upstream = server
        .mock("GET", "/valorant/v4/match/eu/abc-123")
        .match_header("authorization", API_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(payload.to_string())
        .create_async()
        .await;
    let state = state_for(&server.url());

    let resp = match_handler(
        State(state),
        query(&[("region", "eu"), ("matchid", "abc-123")]),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, payload);
    upstream.assert_async().await;
}
