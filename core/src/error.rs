//! Error Types
//!
//! Three taxonomies with different blast radii:
//!
//! - [`ConfigError`] and [`AuthError`] abort the program; without
//!   credentials there is nothing to show.
//! - [`ApiError`] is fatal only for the site-list call. Per-site stats
//!   failures are degraded to inline error text by the fetch tasks and
//!   never propagate.

use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or not unicode.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Errors from the OAuth token flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authorization-code exchange was rejected.
    #[error("token exchange failed: {0}")]
    Exchange(String),
    /// Reading or writing the token cache failed.
    #[error("token cache: {0}")]
    Io(#[from] std::io::Error),
    /// The token request could not be sent or its body read.
    #[error("token request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors from the WordPress.com REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("{endpoint} returned {status}")]
    Status {
        /// Which endpoint answered.
        endpoint: &'static str,
        /// The HTTP status it answered with.
        status: reqwest::StatusCode,
    },
    /// The response body did not match the expected shape.
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        /// Which endpoint answered.
        endpoint: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
