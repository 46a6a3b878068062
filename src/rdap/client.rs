//! RDAP data client: fetches the registration object for an IP address from
//! the server the authority index selects.

use crate::address::Address;
use crate::error::Result;
use crate::http::fetch_json;
use crate::rdap::authority::AuthorityIndex;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;

/// Media type for RDAP responses (RFC 9083)
pub const RDAP_MEDIA_TYPE: &str = "application/rdap+json";

/// RDAP client for IP network lookups
#[derive(Clone)]
pub struct RdapClient {
    client: Client,
    timeout: Duration,
}

impl RdapClient {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Fetch the RDAP IP network object covering `address`.
    ///
    /// Fails with `AuthorityNotFound` without touching the network when no
    /// registry claims the address. The object is returned as-is.
    pub async fn lookup_ip(&self, index: &AuthorityIndex, address: &Address) -> Result<serde_json::Value> {
        let url = index.rdap_ip_url(address)?;
        tracing::debug!(address = %address, url = %url, "Fetching RDAP object");

        let request = self.client.get(url.clone()).header(ACCEPT, RDAP_MEDIA_TYPE);
        fetch_json(request, url.as_str(), "RDAP request", self.timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::CidrBlock;
    use crate::error::DevbenchError;
    use url::Url;

    #[tokio::test]
    async fn test_lookup_without_authority_skips_network() {
        let mut builder = AuthorityIndex::builder();
        builder.insert(
            CidrBlock::parse("1.0.0.0/8").unwrap(),
            Url::parse("http://127.0.0.1:9/").unwrap(),
        );
        let index = builder.build();

        let client = RdapClient::new(Client::new(), Duration::from_secs(1));
        let err = client
            .lookup_ip(&index, &Address::parse("10.0.0.1").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DevbenchError::AuthorityNotFound { .. }));
    }
}
