//! HTTP server wiring: shared state and the router

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::{any, get},
    Router,
};
use chrono::{DateTime, Utc};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::dns::DohClient;
use crate::entities::{EntityRepository, InMemoryEntityRepository};
use crate::error::Result;
use crate::geoip::GeoIpClient;
use crate::handlers;
use crate::http::build_client;
use crate::rdap::{AuthorityIndex, RdapClient};
use crate::types::ServerConfig;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub authority: Arc<AuthorityIndex>,
    pub rdap: RdapClient,
    pub geoip: GeoIpClient,
    pub dns: DohClient,
    pub entities: Arc<dyn EntityRepository>,
    pub config: Arc<ServerConfig>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Assemble state around an already-built authority index
    pub fn new(
        config: ServerConfig,
        authority: AuthorityIndex,
        entities: Arc<dyn EntityRepository>,
    ) -> Result<Self> {
        let client = build_client(config.http_timeout);

        Ok(Self {
            authority: Arc::new(authority),
            rdap: RdapClient::new(client.clone(), config.http_timeout),
            geoip: GeoIpClient::new(client.clone(), config.geoip_url.clone(), config.http_timeout),
            dns: DohClient::new(client, config.doh_url.clone(), config.http_timeout)?,
            entities,
            config: Arc::new(config),
            started_at: Utc::now(),
        })
    }

    /// Load the bootstrap registries and entity catalog named by `config`.
    ///
    /// A missing or malformed bootstrap document is fatal.
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let authority =
            AuthorityIndex::from_bootstrap_files(&config.rdap_ipv4_bootstrap, &config.rdap_ipv6_bootstrap)?;

        let entities: Arc<dyn EntityRepository> = match &config.entities_file {
            Some(path) => Arc::new(InMemoryEntityRepository::from_file(path, config.max_page_size)?),
            None => Arc::new(InMemoryEntityRepository::embedded(config.max_page_size)),
        };

        Self::new(config, authority, entities)
    }
}

/// Build the application router
pub fn create_app(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .on_response(DefaultOnResponse::new().level(Level::INFO).latency_unit(LatencyUnit::Millis))
        .on_failure(DefaultOnFailure::new().level(Level::WARN).latency_unit(LatencyUnit::Millis));
    let cors = cors_layer(&state.config.cors_origins);
    let static_dir = state.config.static_dir.clone();

    let api = Router::new()
        .route("/api/ip", get(handlers::client_ip))
        .route("/api/rdap/{ip}", get(handlers::rdap_lookup))
        .route("/api/rdap/{ip}/authority", get(handlers::rdap_authority))
        .route("/api/geoip/{ip}", get(handlers::geoip_lookup))
        .route("/api/dns", get(handlers::dns_lookup))
        .route("/api/headers", get(handlers::request_headers))
        .route("/api/entities", get(handlers::search_entities))
        .route("/api", any(handlers::api_not_found))
        .route("/api/{*rest}", any(handlers::api_not_found))
        .route("/health", get(handlers::health))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => api.fallback_service(spa_service(&dir)),
        None => api.fallback(handlers::api_not_found),
    };

    router.layer(cors).layer(trace)
}

/// Static files with `index.html` served for unknown paths
fn spa_service(dir: &Path) -> ServeDir<ServeFile> {
    tracing::info!(dir = %dir.display(), "Serving static files");
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(allowed)
}
