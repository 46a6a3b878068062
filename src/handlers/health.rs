//! health check endpoint handler

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::AppState;

/// health check response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    authority_entries: usize,
    entity_count: usize,
    started_at: DateTime<Utc>,
}

/// content-Type for health check responses per RFC 8040
const HEALTH_CONTENT_TYPE: &str = "application/health+json; charset=utf-8";

/// GET /health
///
/// the authority index is built before the listener binds, so a running
/// server always reports `pass`
pub async fn health(State(state): State<AppState>) -> Response {
    let response = HealthResponse {
        status: "pass",
        version: crate::VERSION,
        authority_entries: state.authority.len(),
        entity_count: state.entities.count(),
        started_at: state.started_at,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HEALTH_CONTENT_TYPE)],
        Json(response),
    )
        .into_response()
}
