//! Configuration
//!
//! Environment-driven, no flags and no config file. The dashboard needs
//! three OAuth application values and a place to cache the access token:
//!
//! - `WP_CLIENT_ID`: OAuth client id issued by WordPress.com (required)
//! - `WP_CLIENT_SECRET`: OAuth client secret (required)
//! - `WP_REDIRECT_URI`: redirect URI registered with the application (required)
//! - `PRESSBOARD_TOKEN_FILE`: token cache path override (optional)

use std::path::PathBuf;

use crate::error::ConfigError;

/// OAuth application credentials and file locations.
#[derive(Clone, Debug)]
pub struct Config {
    /// OAuth client id issued by WordPress.com.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Redirect URI registered with the OAuth application.
    pub redirect_uri: String,
    /// Where the access token is cached between runs.
    pub token_file: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: require("WP_CLIENT_ID")?,
            client_secret: require("WP_CLIENT_SECRET")?,
            redirect_uri: require("WP_REDIRECT_URI")?,
            token_file: default_token_file(),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Token cache path: the `PRESSBOARD_TOKEN_FILE` override, else
/// `<data dir>/pressboard/token`, else `.token` in the working directory
/// when no data dir exists.
fn default_token_file() -> PathBuf {
    if let Ok(path) = std::env::var("PRESSBOARD_TOKEN_FILE") {
        return PathBuf::from(path);
    }
    dirs::data_dir()
        .map(|dir| dir.join("pressboard").join("token"))
        .unwrap_or_else(|| PathBuf::from(".token"))
}
