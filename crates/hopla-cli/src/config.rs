//! Credentials and endpoint configuration.
//!
//! Credentials live in an INI file with a single `[credentials]` section
//! holding `user_id` and `api_token`. The file is located with the
//! following precedence:
//!
//! 1. `HOPLA_AUTH_FILE`
//! 2. `$XDG_CONFIG_HOME/hopla/auth.conf`
//! 3. `~/.config/hopla/auth.conf`
//!
//! The API base URL defaults to the public Habitica server and can be
//! pointed elsewhere with `HOPLA_API_URL`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use directories::BaseDirs;
use uuid::Uuid;

use crate::error::CliError;

/// The public Habitica API.
pub const DEFAULT_API_URL: &str = "https://habitica.com/api/v3";

const CREDENTIALS_SECTION: &str = "credentials";
const USER_ID_KEY: &str = "user_id";
const API_TOKEN_KEY: &str = "api_token";

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// Where the auth file lives, given the relevant environment.
///
/// Pure so it can be tested without touching the process environment.
pub fn resolve_auth_file(
    hopla_auth_file: Option<OsString>,
    xdg_config_home: Option<OsString>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(file) = hopla_auth_file.filter(|f| !f.is_empty()) {
        return Some(PathBuf::from(file));
    }
    if let Some(xdg) = xdg_config_home.filter(|x| !x.is_empty()) {
        return Some(PathBuf::from(xdg).join("hopla").join("auth.conf"));
    }
    home.map(|h| h.join(".config").join("hopla").join("auth.conf"))
}

/// The auth file for this process.
pub fn auth_file() -> Result<PathBuf, CliError> {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    resolve_auth_file(
        std::env::var_os("HOPLA_AUTH_FILE"),
        std::env::var_os("XDG_CONFIG_HOME"),
        home,
    )
    .ok_or_else(|| {
        CliError::Config(
            "cannot locate the auth file: set HOPLA_AUTH_FILE or XDG_CONFIG_HOME".to_owned(),
        )
    })
}

/// The API base URL for this process, without a trailing slash.
pub fn api_url() -> String {
    std::env::var("HOPLA_API_URL")
        .ok()
        .filter(|url| !url.is_empty())
        .map_or_else(
            || DEFAULT_API_URL.to_owned(),
            |url| url.trim_end_matches('/').to_owned(),
        )
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Habitica API credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// The user id (`x-api-user`).
    pub user_id: Uuid,
    /// The API token (`x-api-key`).
    pub api_token: Uuid,
}

impl AuthConfig {
    /// Parse credentials as typed on the command line.
    pub fn parse(user_id: &str, api_token: &str) -> Result<Self, CliError> {
        Ok(Self {
            user_id: parse_uuid(USER_ID_KEY, user_id)?,
            api_token: parse_uuid(API_TOKEN_KEY, api_token)?,
        })
    }

    /// Load credentials from an auth file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        if !path.is_file() {
            return Err(CliError::Config(format!(
                "no credentials found at {}; please run `hopla auth` first",
                path.display()
            )));
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini))
            .build()
            .map_err(|e| CliError::Config(format!("failed to read {}: {e}", path.display())))?;

        let get = |key: &str| {
            settings
                .get_string(&format!("{CREDENTIALS_SECTION}.{key}"))
                .map_err(|e| {
                    CliError::Config(format!(
                        "{} has no {key} ({e}); please run `hopla auth --force`",
                        path.display()
                    ))
                })
        };
        let auth = Self::parse(&get(USER_ID_KEY)?, &get(API_TOKEN_KEY)?)?;
        tracing::debug!(path = %path.display(), "credentials loaded");
        Ok(auth)
    }

    /// Write credentials to `path`, creating parent directories.
    ///
    /// Returns `false` without touching anything if the file already exists
    /// and `overwrite` is not set.
    pub fn save(&self, path: &Path, overwrite: bool) -> Result<bool, CliError> {
        if path.exists() && !overwrite {
            tracing::info!(path = %path.display(), "auth file exists, not overwriting");
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_ini())?;
        tracing::info!(path = %path.display(), "auth file written");
        Ok(true)
    }

    fn to_ini(&self) -> String {
        format!(
            "[{CREDENTIALS_SECTION}]\n{USER_ID_KEY} = {}\n{API_TOKEN_KEY} = {}\n",
            self.user_id, self.api_token
        )
    }
}

fn parse_uuid(field: &str, value: &str) -> Result<Uuid, CliError> {
    Uuid::parse_str(value.trim())
        .map_err(|e| CliError::Validation(format!("{field} {value:?} is not a UUID: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const USER: &str = "a8b5c0f2-6b0e-4f1d-9a3c-2d7e8f9a0b1c";
    const TOKEN: &str = "0f0e0d0c-0b0a-4908-8706-050403020100";

    #[test]
    fn env_precedence() {
        let home = Some(PathBuf::from("/home/u"));
        assert_eq!(
            resolve_auth_file(Some("/tmp/a.conf".into()), Some("/x".into()), home.clone()),
            Some(PathBuf::from("/tmp/a.conf"))
        );
        assert_eq!(
            resolve_auth_file(None, Some("/x".into()), home.clone()),
            Some(PathBuf::from("/x/hopla/auth.conf"))
        );
        assert_eq!(
            resolve_auth_file(Some("".into()), None, home),
            Some(PathBuf::from("/home/u/.config/hopla/auth.conf"))
        );
        assert_eq!(resolve_auth_file(None, None, None), None);
    }

    #[test]
    fn parse_rejects_non_uuid() {
        assert!(AuthConfig::parse(USER, TOKEN).is_ok());
        assert!(matches!(
            AuthConfig::parse("not-a-uuid", TOKEN),
            Err(CliError::Validation(_))
        ));
        assert!(matches!(
            AuthConfig::parse(USER, ""),
            Err(CliError::Validation(_))
        ));
    }

    #[test]
    fn ini_layout() {
        let auth = AuthConfig::parse(USER, TOKEN).unwrap();
        assert_eq!(
            auth.to_ini(),
            format!("[credentials]\nuser_id = {USER}\napi_token = {TOKEN}\n")
        );
    }
}
