//! Command dispatch against a local auth file. No request reaches the network.

#![allow(clippy::unwrap_used)]

use clap::Parser;
use hopla_cli::CliError;
use hopla_cli::cli::Cli;
use hopla_cli::commands::run_with_auth_file;
use hopla_cli::config::AuthConfig;
use pretty_assertions::assert_eq;

const USER: &str = "a8b5c0f2-6b0e-4f1d-9a3c-2d7e8f9a0b1c";
const TOKEN: &str = "0f0e0d0c-0b0a-4908-8706-050403020100";

fn command(args: &[&str]) -> hopla_cli::cli::Command {
    Cli::try_parse_from(args).unwrap().command
}

#[tokio::test]
async fn auth_writes_the_auth_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hopla").join("auth.conf");

    let auth = command(&["hopla", "auth", "--user-id", USER, "--api-token", TOKEN]);
    run_with_auth_file(auth, &path).await.unwrap();

    assert_eq!(
        AuthConfig::load(&path).unwrap(),
        AuthConfig::parse(USER, TOKEN).unwrap()
    );
}

#[tokio::test]
async fn auth_rejects_malformed_credentials_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("auth.conf");

    let auth = command(&["hopla", "auth", "--user-id", "nope", "--api-token", TOKEN]);
    let err = run_with_auth_file(auth, &path).await.unwrap_err();

    assert!(matches!(err, CliError::Validation(_)));
    assert!(!path.exists());
}

#[tokio::test]
async fn other_commands_need_credentials_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.conf");

    for args in [
        &["hopla", "feed-all", "--yes"][..],
        &["hopla", "hatch", "Wolf", "Base"][..],
        &["hopla", "get-user", "stats"][..],
    ] {
        let err = run_with_auth_file(command(args), &path).await.unwrap_err();
        assert!(matches!(err, CliError::Config(_)), "{args:?}");
    }
}
