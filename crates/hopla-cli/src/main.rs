//! The `hopla` binary.
//!
//! Parses the command line, sets up logging on stderr, and runs one
//! command. Logging defaults to warnings only; `--verbose` turns on debug
//! output and `RUST_LOG` overrides both.

use clap::Parser;
use hopla_cli::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    hopla_cli::commands::run(cli.command).await?;
    Ok(())
}
