//! WordPress.com OAuth2 Flow
//!
//! Authorization-code exchange with an on-disk token cache. The first run
//! prints the authorization URL, blocks reading the pasted code from
//! stdin, exchanges it for a bearer token, and writes the token to the
//! cache file. Later runs read the cache and skip the dialog entirely.
//!
//! Any failure here is fatal to the program; there is nothing to display
//! without a token.

use std::fs;
use std::io::{self, BufRead, Write};

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AuthError;

const AUTHORIZE_URL: &str = "https://public-api.wordpress.com/oauth2/authorize";
const TOKEN_URL: &str = "https://public-api.wordpress.com/oauth2/token";

/// Successful token-exchange response body.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// The URL the user must visit to authorize the application.
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{AUTHORIZE_URL}?client_id={}&redirect_uri={}&response_type=code&scope=global",
        config.client_id, config.redirect_uri
    )
}

/// Return a bearer token, preferring the on-disk cache.
pub async fn obtain_token(config: &Config) -> Result<String, AuthError> {
    if let Some(token) = cached_token(config)? {
        debug!(path = ?config.token_file, "using cached token");
        return Ok(token);
    }
    let token = interactive_exchange(config).await?;
    cache_token(config, &token)?;
    info!(path = ?config.token_file, "authorization complete, token cached");
    Ok(token)
}

/// Read the cached token, if the cache file exists and is non-empty.
fn cached_token(config: &Config) -> Result<Option<String>, AuthError> {
    if !config.token_file.exists() {
        return Ok(None);
    }
    let token = fs::read_to_string(&config.token_file)?;
    let token = token.trim();
    Ok(if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    })
}

/// Persist the token for the next run.
fn cache_token(config: &Config, token: &str) -> Result<(), AuthError> {
    if let Some(parent) = config.token_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config.token_file, token)?;
    Ok(())
}

/// Print the authorization URL and exchange the pasted code for a token.
async fn interactive_exchange(config: &Config) -> Result<String, AuthError> {
    println!("Visit the URL for the auth dialog: {}", authorize_url(config));
    print!("Paste the code from the redirect URL: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let code = line.trim();
    if code.is_empty() {
        return Err(AuthError::Exchange("empty authorization code".to_string()));
    }

    exchange_code(config, code).await
}

/// POST the authorization code and return the access token.
async fn exchange_code(config: &Config, code: &str) -> Result<String, AuthError> {
    let params = [
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("grant_type", "authorization_code"),
        ("code", code),
    ];

    let response = reqwest::Client::new()
        .post(TOKEN_URL)
        .form(&params)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AuthError::Exchange(format!("{status}: {body}")));
    }

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}
