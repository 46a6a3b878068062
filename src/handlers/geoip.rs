//! geoip lookup endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use super::ApiError;
use crate::address::Address;
use crate::geoip::GeoIpInfo;
use crate::server::AppState;

/// GET /api/geoip/{ip}
pub async fn geoip_lookup(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<GeoIpInfo>, ApiError> {
    let address = Address::parse(&ip)?;
    Ok(Json(state.geoip.lookup(&address).await?))
}
