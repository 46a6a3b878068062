//! IANA RDAP bootstrap registry loader (RFC 9224).
//!
//! A bootstrap document maps CIDR blocks of one address family to the RDAP
//! servers authoritative for them:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "publication": "2024-01-01T00:00:00Z",
//!   "services": [
//!     [["1.0.0.0/8", "27.0.0.0/8"], ["https://rdap.apnic.net/"]]
//!   ]
//! }
//! ```
//!
//! Only the first URI of each service is used; the rest are mirrors.

use crate::address::CidrBlock;
use crate::error::{DevbenchError, Result};
use crate::types::AddressFamily;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use url::Url;

/// One bootstrap record: a set of same-family CIDR blocks and their authority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub blocks: Vec<CidrBlock>,
    pub uri: Url,
}

/// Raw document shape as published by IANA
#[derive(Debug, Deserialize)]
struct BootstrapDocument {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    publication: Option<String>,
    #[serde(default)]
    description: Option<String>,
    services: Vec<(Vec<String>, Vec<String>)>,
}

/// Load a bootstrap document for `family` from any reader
pub fn load_registry<R: Read>(reader: R, family: AddressFamily) -> Result<Vec<ServiceEntry>> {
    let document: BootstrapDocument = serde_json::from_reader(reader)
        .map_err(|e| DevbenchError::malformed_registry(family, e.to_string()))?;
    Ok(convert_document(document, family))
}

/// Load a bootstrap document for `family` from a file
pub fn load_registry_file(path: &Path, family: AddressFamily) -> Result<Vec<ServiceEntry>> {
    let file = std::fs::File::open(path).map_err(|e| {
        DevbenchError::io(
            format!("Failed to open {} bootstrap registry: {}", family, e),
            Some(path.to_string_lossy().to_string()),
        )
    })?;
    tracing::debug!(family = %family, path = %path.display(), "Reading bootstrap registry");
    load_registry(std::io::BufReader::new(file), family)
}

fn convert_document(document: BootstrapDocument, family: AddressFamily) -> Vec<ServiceEntry> {
    let mut entries = Vec::with_capacity(document.services.len());
    let mut skipped_blocks = 0usize;
    let mut skipped_services = 0usize;

    for (cidrs, uris) in document.services {
        let uri = match first_uri(&uris) {
            Some(uri) => uri,
            None => {
                tracing::warn!(family = %family, uris = ?uris, "Skipping bootstrap service without a usable URI");
                skipped_services += 1;
                continue;
            }
        };

        let mut blocks = Vec::with_capacity(cidrs.len());
        for cidr in &cidrs {
            match CidrBlock::parse(cidr) {
                Ok(block) if block.family() == family => blocks.push(block),
                Ok(block) => {
                    tracing::warn!(
                        family = %family,
                        cidr = %cidr,
                        found = %block.family(),
                        "Skipping CIDR block of the wrong address family"
                    );
                    skipped_blocks += 1;
                }
                Err(e) => {
                    tracing::warn!(family = %family, cidr = %cidr, error = %e, "Skipping malformed CIDR block");
                    skipped_blocks += 1;
                }
            }
        }

        if blocks.is_empty() {
            tracing::warn!(family = %family, uri = %uri, "Skipping bootstrap service without valid CIDR blocks");
            skipped_services += 1;
            continue;
        }

        entries.push(ServiceEntry { blocks, uri });
    }

    tracing::info!(
        family = %family,
        services = entries.len(),
        blocks = entries.iter().map(|e| e.blocks.len()).sum::<usize>(),
        skipped_blocks,
        skipped_services,
        version = document.version.as_deref().unwrap_or("-"),
        publication = document.publication.as_deref().unwrap_or("-"),
        description = document.description.as_deref().unwrap_or("-"),
        "Loaded RDAP bootstrap registry"
    );

    entries
}

/// Promote the first URI of a service to a base URL ending in `/`
fn first_uri(uris: &[String]) -> Option<Url> {
    let mut uri = Url::parse(uris.first()?.trim()).ok()?;
    if !matches!(uri.scheme(), "http" | "https") {
        return None;
    }
    if !uri.path().ends_with('/') {
        let path = format!("{}/", uri.path());
        uri.set_path(&path);
    }
    Some(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_V4: &str = r#"{
        "description": "RDAP bootstrap file for IPv4 address allocations",
        "publication": "2024-05-01T00:00:00Z",
        "services": [
            [["1.0.0.0/8"], ["https://rdap.example.com/test1/", "http://rdap.example.com/test1/"]],
            [["8.8.8.0/24", "9.9.9.0/24"], ["https://rdap.example.com/test2/"]]
        ],
        "version": "1.0"
    }"#;

    #[test]
    fn test_load_sample() {
        let entries = load_registry(SAMPLE_V4.as_bytes(), AddressFamily::V4).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].uri.as_str(), "https://rdap.example.com/test1/");
        assert_eq!(entries[0].blocks.len(), 1);
        assert_eq!(entries[1].blocks.len(), 2);
        assert_eq!(entries[1].blocks[1].to_string(), "9.9.9.0/24");
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = load_registry("{ not json".as_bytes(), AddressFamily::V4).unwrap_err();
        assert!(matches!(err, DevbenchError::MalformedRegistry { family: AddressFamily::V4, .. }));
    }

    #[test]
    fn test_missing_services_is_malformed() {
        let err = load_registry(r#"{"version": "1.0"}"#.as_bytes(), AddressFamily::V6).unwrap_err();
        assert!(matches!(err, DevbenchError::MalformedRegistry { family: AddressFamily::V6, .. }));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let doc = r#"{"services": [["1.0.0.0/8", "https://rdap.example.com/"]]}"#;
        assert!(load_registry(doc.as_bytes(), AddressFamily::V4).is_err());
    }

    #[test]
    fn test_bad_cidr_skipped() {
        let doc = r#"{"services": [
            [["1.0.0.0/8", "300.0.0.0/8", "2001:db8::/32"], ["https://rdap.example.com/a/"]],
            [["bogus"], ["https://rdap.example.com/b/"]]
        ]}"#;
        let entries = load_registry(doc.as_bytes(), AddressFamily::V4).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].blocks.len(), 1);
        assert_eq!(entries[0].blocks[0].to_string(), "1.0.0.0/8");
    }

    #[test]
    fn test_service_without_uri_skipped() {
        let doc = r#"{"services": [
            [["1.0.0.0/8"], []],
            [["2.0.0.0/8"], ["not a url"]],
            [["3.0.0.0/8"], ["ftp://rdap.example.com/"]],
            [["4.0.0.0/8"], ["https://rdap.example.com/rdap"]]
        ]}"#;
        let entries = load_registry(doc.as_bytes(), AddressFamily::V4).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].uri.as_str(), "https://rdap.example.com/rdap/");
    }

    #[test]
    fn test_empty_services() {
        let entries = load_registry(r#"{"services": []}"#.as_bytes(), AddressFamily::V6).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ipv4.json");
        std::fs::write(&path, SAMPLE_V4).unwrap();

        let entries = load_registry_file(&path, AddressFamily::V4).unwrap();
        assert_eq!(entries.len(), 2);

        let missing = load_registry_file(&dir.path().join("missing.json"), AddressFamily::V4);
        assert!(matches!(missing, Err(DevbenchError::Io { .. })));
    }
}
