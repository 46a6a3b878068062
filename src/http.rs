//! Shared outbound HTTP plumbing for the provider clients

use crate::error::{DevbenchError, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tokio::time::timeout;

/// User agent sent to every upstream provider
pub const USER_AGENT: &str = concat!("devbench/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by all providers
pub fn build_client(request_timeout: Duration) -> Client {
    Client::builder()
        .timeout(request_timeout)
        .user_agent(USER_AGENT)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to create configured HTTP client: {}. Using default.", e);
            Client::new()
        })
}

/// Send `request` and decode a JSON body.
///
/// `404` maps to [`DevbenchError::UpstreamNotFound`], any other non-success
/// status to [`DevbenchError::Network`] carrying the status code.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
    operation: &str,
    limit: Duration,
) -> Result<T> {
    let started = Instant::now();

    let response = timeout(limit, request.send())
        .await
        .map_err(|_| DevbenchError::timeout(operation, limit.as_secs()))?
        .map_err(|e| transport_error(e, url, operation, limit))?;

    let status = response.status();
    tracing::debug!(
        operation = %operation,
        url = %url,
        status = %status.as_u16(),
        duration_ms = %started.elapsed().as_millis(),
        "Upstream request completed"
    );

    if status.as_u16() == 404 {
        return Err(DevbenchError::upstream_not_found(
            format!("{} returned 404", operation),
            Some(url.to_string()),
        ));
    }

    if !status.is_success() {
        return Err(DevbenchError::network(
            format!("{} failed with status {}", operation, status),
            Some(status.as_u16()),
            Some(url.to_string()),
        ));
    }

    // The body read shares the same overall budget as the request.
    let text = timeout(limit.saturating_sub(started.elapsed()), response.text())
        .await
        .map_err(|_| DevbenchError::timeout(operation, limit.as_secs()))?
        .map_err(|e| transport_error(e, url, operation, limit))?;

    serde_json::from_str(&text).map_err(|e| DevbenchError::parse(e.to_string(), Some(text)))
}

fn transport_error(err: reqwest::Error, url: &str, operation: &str, limit: Duration) -> DevbenchError {
    if err.is_timeout() {
        DevbenchError::timeout(operation, limit.as_secs())
    } else {
        DevbenchError::network(err.to_string(), None, Some(url.to_string()))
    }
}
