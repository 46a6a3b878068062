//! dns-over-https lookup endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::ApiError;
use crate::dns::DnsResponse;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct DnsParams {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    record_type: Option<String>,
}

/// GET /api/dns?name=&type= - resolve through the configured DoH provider
pub async fn dns_lookup(
    State(state): State<AppState>,
    Query(params): Query<DnsParams>,
) -> Result<Json<DnsResponse>, ApiError> {
    let record_type = params.record_type.as_deref().unwrap_or("A");
    let query = state.dns.query(&params.name, record_type)?;
    Ok(Json(state.dns.resolve(&query).await?))
}
