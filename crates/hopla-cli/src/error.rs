//! Error types for the hopla command-line client.
//!
//! Uses `thiserror` for typed errors that surface through every command:
//! auth file handling, HTTP calls, server responses, and domain validation.
//! `main` wraps them in `anyhow` only to print them.

use hopla_hatchery::HatcheryError;
use hopla_zoo::ZooError;

/// Errors that can occur while running a hopla command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The auth file is missing, unreadable, or incomplete.
    #[error("config error: {0}")]
    Config(String),

    /// The Habitica API answered with `success: false` or an error status.
    #[error("Habitica API error: {0}")]
    Api(String),

    /// The request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A command argument was rejected before anything was sent.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The spell is not a target-less class spell.
    #[error("{0} is not a known spell")]
    UnknownSpell(String),

    /// Not enough mana to cast the spell.
    #[error("casting {spell} needs {required} mana but you only have {available}")]
    InsufficientMana {
        /// The spell being cast.
        spell: String,
        /// Mana the spell costs.
        required: u32,
        /// Mana the user has.
        available: f64,
    },

    /// Reading or writing a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Building the zoo or planning a feeding failed.
    #[error(transparent)]
    Zoo(#[from] ZooError),

    /// Building the hatchery or planning hatches failed.
    #[error(transparent)]
    Hatchery(#[from] HatcheryError),
}
