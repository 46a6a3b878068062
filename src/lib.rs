//! devbench - backend for a collection of developer tools
//!
//! Serves a small JSON API: caller IP echo, RDAP lookups routed through the
//! IANA bootstrap registries, GeoIP, DNS-over-HTTPS, request header echo and
//! an HTML entity reference.

pub mod address;
pub mod dns;
pub mod entities;
pub mod error;
pub mod geoip;
pub mod handlers;
pub mod http;
pub mod rdap;
pub mod server;
pub mod types;

// Re-export commonly used types
pub use address::{Address, CidrBlock};
pub use error::{DevbenchError, Result};
pub use rdap::{AuthorityIndex, AuthorityIndexBuilder, ServiceEntry};
pub use server::{create_app, AppState};
pub use types::{AddressFamily, ServerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}

/// Install the global tracing subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
