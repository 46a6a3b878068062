//! rdap lookup endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::ApiError;
use crate::address::Address;
use crate::server::AppState;
use crate::types::AddressFamily;

/// authority resolution result, no upstream call involved
#[derive(Debug, Serialize)]
pub struct AuthorityResponse {
    pub address: Address,
    pub family: AddressFamily,
    pub authority: String,
    pub query_url: String,
}

/// GET /api/rdap/{ip} - fetch the RDAP network object from the authoritative server
pub async fn rdap_lookup(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let address = Address::parse(&ip)?;
    let object = state.rdap.lookup_ip(&state.authority, &address).await?;
    Ok(Json(object))
}

/// GET /api/rdap/{ip}/authority - which RDAP server is responsible for an address
pub async fn rdap_authority(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<AuthorityResponse>, ApiError> {
    let address = Address::parse(&ip)?;
    let authority = state.authority.resolve(&address)?.to_string();
    let query_url = state.authority.rdap_ip_url(&address)?.to_string();

    tracing::debug!(address = %address, authority = %authority, "Resolved RDAP authority");

    Ok(Json(AuthorityResponse {
        address,
        family: address.family(),
        authority,
        query_url,
    }))
}
