//! Command handlers.
//!
//! Each handler fetches what it needs, builds its domain models, and talks
//! to the API one request at a time.

mod auth;
mod cast;
mod feed;
mod feed_all;
mod get_user;
mod hatch;
mod hatch_all;

use std::path::Path;

use crate::cli::Command;
use crate::client::HabiticaClient;
use crate::config::{self, AuthConfig};
use crate::error::CliError;

/// Run one command to completion.
pub async fn run(command: Command) -> Result<(), CliError> {
    run_with_auth_file(command, &config::auth_file()?).await
}

/// Run one command with credentials stored at `auth_file`.
///
/// `auth` writes the file; every other command reads it before sending
/// anything.
pub async fn run_with_auth_file(command: Command, auth_file: &Path) -> Result<(), CliError> {
    match command {
        Command::Auth(args) => auth::run(&args, auth_file),
        Command::GetUser(sub) => get_user::run(&connect(auth_file)?, &sub).await,
        Command::Feed(args) => feed::run(&connect(auth_file)?, &args).await,
        Command::FeedAll(args) => feed_all::run(&connect(auth_file)?, args.yes).await,
        Command::Hatch(args) => hatch::run(&connect(auth_file)?, &args).await,
        Command::HatchAll(args) => hatch_all::run(&connect(auth_file)?, args.yes).await,
        Command::Cast(args) => cast::run(&connect(auth_file)?, &args.spell).await,
    }
}

fn connect(auth_file: &Path) -> Result<HabiticaClient, CliError> {
    let credentials = AuthConfig::load(auth_file)?;
    HabiticaClient::new(&credentials, config::api_url())
}
