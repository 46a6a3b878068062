//! Integration tests for the RDAP authority index built from bootstrap files

use devbench::rdap::load_registry_file;
use devbench::{Address, AddressFamily, AuthorityIndex, DevbenchError};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn shipped(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/rdap").join(name)
}

fn addr(s: &str) -> Address {
    Address::parse(s).unwrap()
}

fn fixture_index() -> AuthorityIndex {
    AuthorityIndex::from_bootstrap_files(&fixture("ipv4.json"), &fixture("ipv6.json")).unwrap()
}

#[test]
fn test_fixture_lookups() {
    let index = fixture_index();

    assert_eq!(
        index.resolve(&addr("1.2.3.4")).unwrap().as_str(),
        "https://rdap.example.com/test1/"
    );
    assert_eq!(
        index.resolve(&addr("8.8.8.8")).unwrap().as_str(),
        "https://rdap.example.com/test2/"
    );
    assert!(matches!(
        index.resolve(&addr("10.0.0.1")),
        Err(DevbenchError::AuthorityNotFound { .. })
    ));
}

#[test]
fn test_fixture_range_bounds() {
    let index = fixture_index();

    assert!(index.resolve(&addr("1.0.0.0")).is_ok());
    assert!(index.resolve(&addr("1.255.255.255")).is_ok());
    assert!(index.resolve(&addr("0.255.255.255")).is_err());
    assert!(index.resolve(&addr("2.0.0.0")).is_err());
}

#[test]
fn test_fixture_with_empty_ipv6_registry() {
    let index = fixture_index();

    assert_eq!(index.family_len(AddressFamily::V6), 0);
    assert!(index.resolve(&addr("2001:db8::1")).is_err());
    assert!(index.resolve(&addr("::1")).is_err());
}

#[test]
fn test_shipped_registries_cover_each_rir() {
    let index = AuthorityIndex::from_bootstrap_files(&shipped("ipv4.json"), &shipped("ipv6.json")).unwrap();

    let cases = [
        ("8.8.8.8", "https://rdap.arin.net/registry/"),
        ("1.1.1.1", "https://rdap.apnic.net/"),
        ("193.0.6.139", "https://rdap.db.ripe.net/"),
        ("200.160.2.3", "https://rdap.lacnic.net/rdap/"),
        ("196.216.2.1", "https://rdap.afrinic.net/rdap/"),
        ("2001:4860:4860::8888", "https://rdap.arin.net/registry/"),
        ("2a00:1450:4001::1", "https://rdap.db.ripe.net/"),
        ("2400:cb00::1", "https://rdap.apnic.net/"),
        ("2800:3f0::1", "https://rdap.lacnic.net/rdap/"),
        ("2c0f:fb50::1", "https://rdap.afrinic.net/rdap/"),
    ];
    for (ip, expected) in cases {
        assert_eq!(index.resolve(&addr(ip)).unwrap().as_str(), expected, "{ip}");
    }

    // reserved space is not delegated to any RIR
    assert!(index.resolve(&addr("10.1.2.3")).is_err());
    assert!(index.resolve(&addr("127.0.0.1")).is_err());
    assert!(index.resolve(&addr("fe80::1")).is_err());
}

#[test]
fn test_every_shipped_block_resolves_at_both_ends() {
    let v4 = load_registry_file(&shipped("ipv4.json"), AddressFamily::V4).unwrap();
    let v6 = load_registry_file(&shipped("ipv6.json"), AddressFamily::V6).unwrap();
    let index = AuthorityIndex::build(&v4, &v6);

    let mut checked = 0;
    for entry in v4.iter().chain(&v6) {
        for block in &entry.blocks {
            for endpoint in [block.first_address(), block.last_address()] {
                let authority = index.resolve(&endpoint).unwrap();
                assert_eq!(*authority, entry.uri, "{block} at {endpoint}");
                checked += 1;
            }
        }
    }
    assert!(checked > 0);
}

#[test]
fn test_malformed_registry_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("ipv6.json");
    std::fs::write(&broken, r#"{"version": "1.0", "services": "nope"}"#).unwrap();

    let err = AuthorityIndex::from_bootstrap_files(&fixture("ipv4.json"), &broken).unwrap_err();
    assert!(matches!(
        err,
        DevbenchError::MalformedRegistry {
            family: AddressFamily::V6,
            ..
        }
    ));
}

#[test]
fn test_missing_registry_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let err = AuthorityIndex::from_bootstrap_files(&missing, &fixture("ipv6.json")).unwrap_err();
    assert!(matches!(err, DevbenchError::Io { .. }));
}

#[test]
fn test_rdap_query_url() {
    let index = fixture_index();
    let url = index.rdap_ip_url(&addr("8.8.8.8")).unwrap();
    assert_eq!(url.as_str(), "https://rdap.example.com/test2/ip/8.8.8.8");
}
