use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::client::{HenrikClient, Upstream};
use crate::error::TrackerError;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<HenrikClient>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/mmr", get(mmr_handler))
        .route("/api/mmr-history", get(mmr_history_handler))
        .route("/api/matches", get(matches_handler))
        .route("/api/match", get(match_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

fn error_response(e: TrackerError) -> axum::response::Response {
    match e {
        TrackerError::RateLimited => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        e => {
            warn!("Upstream call failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}

fn missing_params(message: &str) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// Mirror the upstream reply; errors (including the 429 translation) are
/// mapped centrally.
fn relay(result: Result<Upstream, TrackerError>) -> axum::response::Response {
    match result {
        Ok(up) => (up.status, Json(up.body)).into_response(),
        Err(e) => error_response(e),
    }
}

/// The player identifier requires non-empty strings, so empty counts as missing.
fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

pub async fn mmr_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    info!("GET /api/mmr");
    let (Some(region), Some(name), Some(tag)) = (
        param(&params, "region"),
        param(&params, "name"),
        param(&params, "tag"),
    ) else {
        return missing_params("Missing region, name, or tag");
    };
    relay(state.client.mmr(region, name, tag).await)
}

pub async fn mmr_history_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    info!("GET /api/mmr-history");
    let (Some(region), Some(name), Some(tag)) = (
        param(&params, "region"),
        param(&params, "name"),
        param(&params, "tag"),
    ) else {
        return missing_params("Missing region, name, or tag");
    };
    relay(state.client.mmr_history(region, name, tag).await)
}

pub async fn matches_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    info!("GET /api/matches");
    let (Some(region), Some(name), Some(tag)) = (
        param(&params, "region"),
        param(&params, "name"),
        param(&params, "tag"),
    ) else {
        return missing_params("Missing region, name, or tag");
    };
    relay(state.client.matches(region, name, tag).await)
}

pub async fn match_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    info!("GET /api/match");
    let (Some(region), Some(match_id)) =
        (param(&params, "region"), param(&params, "matchid"))
    else {
        return missing_params("Missing region or matchid");
    };
    relay(state.client.match_details(region, match_id).await)
}
