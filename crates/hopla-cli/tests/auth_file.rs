//! Auth file round trips on a real filesystem.

#![allow(clippy::unwrap_used)]

use std::fs;

use hopla_cli::CliError;
use hopla_cli::config::AuthConfig;
use pretty_assertions::assert_eq;

const USER: &str = "a8b5c0f2-6b0e-4f1d-9a3c-2d7e8f9a0b1c";
const TOKEN: &str = "0f0e0d0c-0b0a-4908-8706-050403020100";
const OTHER_TOKEN: &str = "11111111-2222-4333-8444-555555555555";

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hopla").join("auth.conf");
    let auth = AuthConfig::parse(USER, TOKEN).unwrap();

    assert!(auth.save(&path, false).unwrap());
    assert_eq!(AuthConfig::load(&path).unwrap(), auth);
}

#[test]
fn existing_file_is_kept_without_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("auth.conf");
    let first = AuthConfig::parse(USER, TOKEN).unwrap();
    let second = AuthConfig::parse(USER, OTHER_TOKEN).unwrap();

    assert!(first.save(&path, false).unwrap());
    assert!(!second.save(&path, false).unwrap());
    assert_eq!(AuthConfig::load(&path).unwrap(), first);

    assert!(second.save(&path, true).unwrap());
    assert_eq!(AuthConfig::load(&path).unwrap(), second);
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AuthConfig::load(&dir.path().join("absent.conf")).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    assert!(err.to_string().contains("hopla auth"));
}

#[test]
fn missing_token_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("auth.conf");
    fs::write(&path, format!("[credentials]\nuser_id = {USER}\n")).unwrap();

    let err = AuthConfig::load(&path).unwrap_err();
    assert!(matches!(err, CliError::Config(ref msg) if msg.contains("api_token")));
}

#[test]
fn malformed_uuid_in_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("auth.conf");
    fs::write(&path, "[credentials]\nuser_id = nope\napi_token = nope\n").unwrap();

    assert!(matches!(
        AuthConfig::load(&path),
        Err(CliError::Validation(_))
    ));
}
