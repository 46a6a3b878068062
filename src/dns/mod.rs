//! DNS-over-HTTPS resolution through the Google JSON API.
//!
//! See <https://developers.google.com/speed/public-dns/docs/doh/json>.

pub mod validator;

pub use validator::{reverse_name, NameValidator};

use crate::address::Address;
use crate::error::{DevbenchError, Result};
use crate::http::fetch_json;
use domain::base::iana::{Rcode, Rtype};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub const GOOGLE: &str = "https://dns.google/resolve";

// Cloudflare requires this media type; Google accepts it too.
const CONTENT_TYPE_APPLICATION_DNS_JSON: &str = "application/dns-json";

/// Record type accepted by the lookup endpoint.
///
/// Names are limited to a fixed set of common types; any other type may be
/// requested by its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordType(Rtype);

impl RecordType {
    pub const A: Self = Self(Rtype::A);
    pub const PTR: Self = Self(Rtype::PTR);

    const NAMED: &'static [Rtype] = &[
        Rtype::A,
        Rtype::NS,
        Rtype::CNAME,
        Rtype::SOA,
        Rtype::PTR,
        Rtype::MX,
        Rtype::TXT,
        Rtype::AAAA,
        Rtype::SRV,
        Rtype::DS,
        Rtype::DNSKEY,
        Rtype::CAA,
    ];

    /// Numeric RR type code, as sent upstream
    pub fn code(self) -> u16 {
        self.0.to_int()
    }
}

impl FromStr for RecordType {
    type Err = DevbenchError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(rtype) = Self::NAMED
            .iter()
            .find(|rtype| rtype.to_string().eq_ignore_ascii_case(s))
        {
            return Ok(Self(*rtype));
        }
        match s.parse::<u16>() {
            Ok(code) if code > 0 => Ok(Self(Rtype::from_int(code))),
            _ => Err(DevbenchError::validation(format!("Unsupported record type '{}'", s))),
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Mnemonic for an RR type code; unassigned codes render as `TYPEnnn`
pub fn type_name(code: u16) -> String {
    Rtype::from_int(code).to_string()
}

/// Mnemonic for a DNS response code
pub fn rcode_name(status: u32) -> String {
    u8::try_from(status)
        .ok()
        .and_then(Rcode::checked_from_int)
        .map(|rcode| rcode.to_string())
        .unwrap_or_else(|| format!("RCODE{}", status))
}

/// A validated DoH query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: String,
    pub record_type: RecordType,
}

/// Response in the Google JSON API shape, plus derived names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsResponse {
    pub status: u32,
    #[serde(default)]
    pub status_name: String,
    #[serde(rename = "TC", default)]
    pub tc: bool,
    #[serde(rename = "RD", default)]
    pub rd: bool,
    #[serde(rename = "RA", default)]
    pub ra: bool,
    #[serde(rename = "AD", default)]
    pub ad: bool,
    #[serde(rename = "CD", default)]
    pub cd: bool,
    #[serde(default)]
    pub question: Vec<DnsQuestion>,
    #[serde(default)]
    pub answer: Vec<DnsRecord>,
    #[serde(default)]
    pub authority: Vec<DnsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsQuestion {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "typeName", default)]
    pub type_name: String,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    pub data: String,
}

impl DnsResponse {
    fn annotate(mut self) -> Self {
        self.status_name = rcode_name(self.status);
        for record in self.answer.iter_mut().chain(self.authority.iter_mut()) {
            record.type_name = type_name(record.record_type);
        }
        self
    }
}

/// DNS-over-HTTPS JSON client
#[derive(Clone)]
pub struct DohClient {
    client: Client,
    url: String,
    timeout: Duration,
    validator: Arc<NameValidator>,
}

impl DohClient {
    pub fn new(client: Client, url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client,
            url: url.into(),
            timeout,
            validator: Arc::new(NameValidator::new()?),
        })
    }

    /// Validate user input into a query.
    ///
    /// For `PTR` lookups an IP address may be given instead of a name; it is
    /// rewritten to its reverse-lookup name.
    pub fn query(&self, name: &str, record_type: &str) -> Result<DnsQuery> {
        let record_type: RecordType = record_type.parse()?;

        if record_type == RecordType::PTR {
            if let Ok(address) = Address::parse(name) {
                return Ok(DnsQuery {
                    name: reverse_name(&address),
                    record_type,
                });
            }
        }

        Ok(DnsQuery {
            name: self.validator.validate(name)?,
            record_type,
        })
    }

    /// Resolve a validated query
    pub async fn resolve(&self, query: &DnsQuery) -> Result<DnsResponse> {
        let record_type = query.record_type;
        let code = record_type.code().to_string();
        let display_url = format!("{}?name={}&type={}", self.url, query.name, code);

        let request = self
            .client
            .get(&self.url)
            .query(&[("name", query.name.as_str()), ("type", code.as_str())])
            .header(ACCEPT, CONTENT_TYPE_APPLICATION_DNS_JSON);

        let response: DnsResponse = fetch_json(request, &display_url, "DoH request", self.timeout).await?;
        tracing::debug!(
            name = %query.name,
            record_type = %record_type,
            status = response.status,
            answers = response.answer.len(),
            "DoH query resolved"
        );

        Ok(response.annotate())
    }
}
