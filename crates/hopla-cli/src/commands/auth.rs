//! `hopla auth`: store credentials.

use std::path::Path;

use crate::cli::AuthArgs;
use crate::config::AuthConfig;
use crate::error::CliError;
use crate::output;

/// Validate and store the given credentials.
pub fn run(args: &AuthArgs, auth_file: &Path) -> Result<(), CliError> {
    let credentials = AuthConfig::parse(&args.user_id, &args.api_token)?;
    if credentials.save(auth_file, args.force)? {
        output::explain(&format!("Credentials saved to {}", auth_file.display()))
    } else {
        output::explain(&format!(
            "{} already exists, use --force to overwrite it",
            auth_file.display()
        ))
    }
}
