//! startup failures of the devbench binary

use assert_cmd::Command;
use predicates::prelude::*;

fn devbench() -> Command {
    let mut cmd = Command::cargo_bin("devbench").unwrap();
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_invalid_listen_address_exits_with_error() {
    devbench()
        .env("DEVBENCH_LISTEN_ADDR", "not-an-address")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_bootstrap_registry_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    devbench()
        .env("DEVBENCH_LISTEN_ADDR", "127.0.0.1:0")
        .env("DEVBENCH_RDAP_IPV4_BOOTSTRAP", dir.path().join("missing.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ipv4 bootstrap registry"));
}

#[test]
fn test_malformed_bootstrap_registry_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("ipv6.json");
    std::fs::write(&broken, "{ \"services\": 42 }").unwrap();

    devbench()
        .env("DEVBENCH_LISTEN_ADDR", "127.0.0.1:0")
        .env("DEVBENCH_RDAP_IPV4_BOOTSTRAP", concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ipv4.json"))
        .env("DEVBENCH_RDAP_IPV6_BOOTSTRAP", &broken)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Malformed ipv6 bootstrap registry"));
}
