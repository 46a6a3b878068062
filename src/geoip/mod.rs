//! GeoIP lookup against an ip-api.com compatible provider

use crate::address::Address;
use crate::error::{DevbenchError, Result};
use crate::http::fetch_json;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Normalized GeoIP record returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoIpInfo {
    pub query: String,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
    pub isp: Option<String>,
    pub org: Option<String>,
    pub as_name: Option<String>,
}

/// Provider response shape
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    query: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    region: Option<String>,
    region_name: Option<String>,
    city: Option<String>,
    zip: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    as_name: Option<String>,
}

/// Provider failure messages meaning "no data for this address"
const NOT_FOUND_MESSAGES: &[&str] = &["reserved range", "private range", "invalid query"];

/// GeoIP HTTP client
#[derive(Clone)]
pub struct GeoIpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl GeoIpClient {
    pub fn new(client: Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            client,
            base_url,
            timeout,
        }
    }

    /// Look up the location of `address`
    pub async fn lookup(&self, address: &Address) -> Result<GeoIpInfo> {
        let url = format!("{}{}", self.base_url, address);
        let response: ProviderResponse =
            fetch_json(self.client.get(&url), &url, "GeoIP request", self.timeout).await?;

        Self::normalize(response, address, &url)
    }

    fn normalize(response: ProviderResponse, address: &Address, url: &str) -> Result<GeoIpInfo> {
        if !response.status.eq_ignore_ascii_case("success") {
            let message = response.message.unwrap_or_else(|| "lookup failed".to_string());
            tracing::debug!(address = %address, message = %message, "GeoIP provider reported failure");

            return if NOT_FOUND_MESSAGES.contains(&message.to_lowercase().as_str()) {
                Err(DevbenchError::upstream_not_found(
                    format!("No GeoIP data for {}: {}", address, message),
                    Some(url.to_string()),
                ))
            } else {
                Err(DevbenchError::network(
                    format!("GeoIP provider error: {}", message),
                    None,
                    Some(url.to_string()),
                ))
            };
        }

        Ok(GeoIpInfo {
            query: response.query.unwrap_or_else(|| address.to_string()),
            country: response.country,
            country_code: response.country_code,
            region: response.region,
            region_name: response.region_name,
            city: response.city,
            zip: response.zip,
            lat: response.lat,
            lon: response.lon,
            timezone: response.timezone,
            isp: response.isp,
            org: response.org,
            as_name: response.as_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ProviderResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_normalize_success() {
        let response = parse(
            r#"{"status":"success","country":"United States","countryCode":"US","region":"VA",
                "regionName":"Virginia","city":"Ashburn","zip":"20149","lat":39.03,"lon":-77.5,
                "timezone":"America/New_York","isp":"Google LLC","org":"Google Public DNS",
                "as":"AS15169 Google LLC","query":"8.8.8.8"}"#,
        );
        let address = Address::parse("8.8.8.8").unwrap();
        let info = GeoIpClient::normalize(response, &address, "http://geo/8.8.8.8").unwrap();

        assert_eq!(info.query, "8.8.8.8");
        assert_eq!(info.country_code.as_deref(), Some("US"));
        assert_eq!(info.as_name.as_deref(), Some("AS15169 Google LLC"));
        assert_eq!(info.lat, Some(39.03));
    }

    #[test]
    fn test_normalize_reserved_range_is_not_found() {
        let response = parse(r#"{"status":"fail","message":"private range","query":"10.0.0.1"}"#);
        let address = Address::parse("10.0.0.1").unwrap();
        let err = GeoIpClient::normalize(response, &address, "http://geo/10.0.0.1").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_normalize_other_failure_is_network() {
        let response = parse(r#"{"status":"fail","message":"quota exceeded"}"#);
        let address = Address::parse("1.1.1.1").unwrap();
        let err = GeoIpClient::normalize(response, &address, "http://geo/1.1.1.1").unwrap_err();
        assert!(matches!(err, DevbenchError::Network { .. }));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = GeoIpClient::new(Client::new(), "http://ip-api.com/json", Duration::from_secs(1));
        assert_eq!(client.base_url, "http://ip-api.com/json/");
    }
}
