//! devbench - developer tools backend
//!
//! Loads the RDAP bootstrap registries, then serves the JSON API (and
//! optionally the single-page frontend) until interrupted.

use devbench::{create_app, AppState, Result, ServerConfig};
use std::net::SocketAddr;
use std::process;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = devbench::init() {
        eprintln!("Failed to initialize: {}", e);
        process::exit(1);
    }
    devbench::init_tracing();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "devbench failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ServerConfig::from_env()?;
    let listen_addr = config.listen_addr;

    tracing::info!(
        version = devbench::VERSION,
        ipv4_bootstrap = %config.rdap_ipv4_bootstrap.display(),
        ipv6_bootstrap = %config.rdap_ipv6_bootstrap.display(),
        "Starting devbench"
    );

    let state = AppState::from_config(config)?;
    let app = create_app(state);

    let listener = TcpListener::bind(listen_addr).await?;
    tracing::info!(addr = %listen_addr, "Listening");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
