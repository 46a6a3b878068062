//! http handlers for the devbench api

mod dns;
mod entities;
pub mod error;
mod geoip;
mod headers;
mod health;
mod ip;
mod rdap;

pub use dns::dns_lookup;
pub use entities::search_entities;
pub use error::ApiError;
pub use geoip::geoip_lookup;
pub use headers::request_headers;
pub use health::health;
pub use ip::client_ip;
pub use rdap::{rdap_authority, rdap_lookup};

/// fallback for unknown `/api/*` paths
pub async fn api_not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::not_found(format!("No API route for {}", uri.path()))
}
