//! Command-line client for the Habitica API.
//!
//! Talks to the server one request at a time and keeps the game rules in
//! the `hopla-zoo` and `hopla-hatchery` crates, so every command can
//! validate its input before anything is sent.
//!
//! # Modules
//!
//! - [`cli`] -- Argument parsing ([`cli::Cli`])
//! - [`client`] -- Authenticated HTTP client ([`client::HabiticaClient`])
//! - [`commands`] -- One handler per command
//! - [`config`] -- Auth file location and credentials ([`config::AuthConfig`])
//! - [`error`] -- Error types for every command ([`CliError`])
//! - [`output`] -- JSON output, explanations, and confirmation prompts

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

// Re-export primary types at crate root for convenience.
pub use error::CliError;
