//! caller address echo

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;

use super::ApiError;
use crate::address::Address;
use crate::server::AppState;
use crate::types::AddressFamily;

#[derive(Debug, Serialize)]
pub struct ClientIpResponse {
    pub ip: Address,
    pub family: AddressFamily,
}

/// GET /api/ip - report the caller's address
///
/// uses the leftmost `X-Forwarded-For` entry when forwarded headers are
/// trusted, otherwise the socket peer
pub async fn client_ip(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<ClientIpResponse>, ApiError> {
    let forwarded = if state.config.trust_forwarded {
        forwarded_for(request.headers())
    } else {
        None
    };

    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip());

    let ip = forwarded
        .or(peer)
        .ok_or_else(|| ApiError::internal("Client address unavailable"))?;

    let address = Address::from(ip).canonical();
    Ok(Json(ClientIpResponse {
        ip: address,
        family: address.family(),
    }))
}

fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    let header_str = headers.get("x-forwarded-for")?.to_str().ok()?;
    // take the first (leftmost) entry - this is the original client
    let first = header_str.split(',').next()?;
    Address::parse(first).ok().map(|a| a.ip())
}
