//! Core types and configuration for devbench

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// IP address family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    #[serde(rename = "ipv4")]
    V4,
    #[serde(rename = "ipv6")]
    V6,
}

impl AddressFamily {
    /// Width of the family's integer scale in bits
    pub fn bits(self) -> u8 {
        match self {
            AddressFamily::V4 => 32,
            AddressFamily::V6 => 128,
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "ipv4"),
            AddressFamily::V6 => write!(f, "ipv6"),
        }
    }
}

/// Environment variable names read by [`ServerConfig::from_env`]
pub mod env_keys {
    pub const LISTEN_ADDR: &str = "DEVBENCH_LISTEN_ADDR";
    pub const RDAP_IPV4_BOOTSTRAP: &str = "DEVBENCH_RDAP_IPV4_BOOTSTRAP";
    pub const RDAP_IPV6_BOOTSTRAP: &str = "DEVBENCH_RDAP_IPV6_BOOTSTRAP";
    pub const GEOIP_URL: &str = "DEVBENCH_GEOIP_URL";
    pub const DOH_URL: &str = "DEVBENCH_DOH_URL";
    pub const STATIC_DIR: &str = "DEVBENCH_STATIC_DIR";
    pub const ENTITIES_FILE: &str = "DEVBENCH_ENTITIES_FILE";
    pub const CORS_ORIGINS: &str = "DEVBENCH_CORS_ORIGINS";
    pub const TRUST_FORWARDED: &str = "DEVBENCH_TRUST_FORWARDED";
    pub const HTTP_TIMEOUT_SECS: &str = "DEVBENCH_HTTP_TIMEOUT_SECS";
    pub const MAX_PAGE_SIZE: &str = "DEVBENCH_MAX_PAGE_SIZE";
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub rdap_ipv4_bootstrap: PathBuf,
    pub rdap_ipv6_bootstrap: PathBuf,
    pub geoip_url: String,
    pub doh_url: String,
    /// Directory holding the single-page application; `None` disables static serving
    pub static_dir: Option<PathBuf>,
    /// WHATWG `entities.json`; `None` uses the embedded catalog
    pub entities_file: Option<PathBuf>,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
    /// Honour `X-Forwarded-For` when reporting the caller's address
    pub trust_forwarded: bool,
    pub http_timeout: Duration,
    pub max_page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            rdap_ipv4_bootstrap: PathBuf::from("data/rdap/ipv4.json"),
            rdap_ipv6_bootstrap: PathBuf::from("data/rdap/ipv6.json"),
            geoip_url: "http://ip-api.com/json/".to_string(),
            doh_url: crate::dns::GOOGLE.to_string(),
            static_dir: None,
            entities_file: None,
            cors_origins: Vec::new(),
            trust_forwarded: false,
            http_timeout: Duration::from_secs(10),
            max_page_size: 100,
        }
    }
}

impl ServerConfig {
    /// Build configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(addr) = get(env_keys::LISTEN_ADDR) {
            config.listen_addr = addr.parse().map_err(|e| {
                crate::config_error!("{} '{}': {}", env_keys::LISTEN_ADDR, addr, e)
            })?;
        }
        if let Some(path) = get(env_keys::RDAP_IPV4_BOOTSTRAP) {
            config.rdap_ipv4_bootstrap = PathBuf::from(path);
        }
        if let Some(path) = get(env_keys::RDAP_IPV6_BOOTSTRAP) {
            config.rdap_ipv6_bootstrap = PathBuf::from(path);
        }
        if let Some(url) = get(env_keys::GEOIP_URL) {
            config.geoip_url = url;
        }
        if let Some(url) = get(env_keys::DOH_URL) {
            config.doh_url = url;
        }
        config.static_dir = get(env_keys::STATIC_DIR).map(PathBuf::from);
        config.entities_file = get(env_keys::ENTITIES_FILE).map(PathBuf::from);
        if let Some(origins) = get(env_keys::CORS_ORIGINS) {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(flag) = get(env_keys::TRUST_FORWARDED) {
            config.trust_forwarded = parse_bool(env_keys::TRUST_FORWARDED, &flag)?;
        }
        if let Some(secs) = get(env_keys::HTTP_TIMEOUT_SECS) {
            let secs: u64 = secs.parse().map_err(|e| {
                crate::config_error!("{} '{}': {}", env_keys::HTTP_TIMEOUT_SECS, secs, e)
            })?;
            config.http_timeout = Duration::from_secs(secs);
        }
        if let Some(size) = get(env_keys::MAX_PAGE_SIZE) {
            config.max_page_size = size.parse().map_err(|e| {
                crate::config_error!("{} '{}': {}", env_keys::MAX_PAGE_SIZE, size, e)
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.http_timeout.is_zero() {
            return Err(crate::config_error!("HTTP timeout must be greater than zero"));
        }
        if self.max_page_size == 0 {
            return Err(crate::config_error!("Maximum page size must be greater than zero"));
        }
        if self.geoip_url.is_empty() || self.doh_url.is_empty() {
            return Err(crate::config_error!("Provider URLs cannot be empty"));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(crate::config_error!(
            "{} '{}': expected a boolean",
            key,
            value
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert!(config.static_dir.is_none());
        assert!(config.cors_origins.is_empty());
        assert!(!config.trust_forwarded);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (env_keys::LISTEN_ADDR, "127.0.0.1:3000"),
            (env_keys::CORS_ORIGINS, "https://a.example, https://b.example,"),
            (env_keys::TRUST_FORWARDED, "yes"),
            (env_keys::HTTP_TIMEOUT_SECS, "3"),
            (env_keys::STATIC_DIR, "web/dist"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.cors_origins.len(), 2);
        assert!(config.trust_forwarded);
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.static_dir, Some(PathBuf::from("web/dist")));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ServerConfig::from_lookup(lookup(&[(env_keys::LISTEN_ADDR, "nope")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(env_keys::TRUST_FORWARDED, "maybe")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(env_keys::HTTP_TIMEOUT_SECS, "0")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(env_keys::MAX_PAGE_SIZE, "-1")])).is_err());
    }

    #[test]
    fn test_family_display() {
        assert_eq!(AddressFamily::V4.to_string(), "ipv4");
        assert_eq!(AddressFamily::V6.to_string(), "ipv6");
        assert_eq!(AddressFamily::V6.bits(), 128);
        assert_eq!(serde_json::to_string(&AddressFamily::V4).unwrap(), "\"ipv4\"");
    }
}
