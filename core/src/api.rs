//! WordPress.com REST API Client
//!
//! Two authenticated endpoints:
//!
//! - `GET /rest/v1/me/sites`: the account's site list. A failure here is
//!   fatal: without the enumeration there is nothing to seed the store
//!   with.
//! - `GET /rest/v1.1/sites/{domain}/stats`: one site's statistics,
//!   including the day-by-day visits table. Failures here stay local to
//!   the site.
//!
//! The visits table arrives as loosely typed rows (`[period, views,
//! visitors]` with mixed JSON types), so the views column is extracted
//! defensively: a missing or non-numeric cell decodes as zero instead of
//! failing the whole site.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::model::{Site, StatsSnapshot, HISTORY_DAYS};

const API_BASE: &str = "https://public-api.wordpress.com/rest";

/// Source of per-site statistics.
///
/// The fetch fan-out depends on this seam rather than on the concrete
/// HTTP client, so tests can substitute a scripted source.
#[async_trait]
pub trait StatsSource: Send + Sync + 'static {
    /// Fetch the current statistics for one site.
    async fn site_stats(&self, site: &Site) -> Result<StatsSnapshot, ApiError>;
}

/// HTTP client for the authenticated WordPress.com endpoints.
#[derive(Clone)]
pub struct WpClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

/// `/me/sites` response envelope.
#[derive(Debug, Deserialize)]
struct SiteListEnvelope {
    sites: Vec<Site>,
}

/// `/sites/{domain}/stats` response envelope.
#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    stats: StatValues,
    #[serde(default)]
    visits: Option<Visits>,
}

/// Headline counters inside the stats envelope.
#[derive(Debug, Default, Deserialize)]
struct StatValues {
    #[serde(default)]
    views_today: u64,
    #[serde(default)]
    visitors_today: u64,
    #[serde(default)]
    views_yesterday: u64,
    #[serde(default)]
    visitors_yesterday: u64,
}

/// Day-by-day visits: one `[period, views, visitors]` row per day,
/// oldest first, with loosely typed cells.
#[derive(Debug, Default, Deserialize)]
struct Visits {
    #[serde(default)]
    data: Vec<Vec<serde_json::Value>>,
}

impl WpClient {
    /// Create a client that authenticates with `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            token: token.into(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Point the client at a different API root (used by tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// All sites the authenticated account can read.
    pub async fn list_sites(&self) -> Result<Vec<Site>, ApiError> {
        let url = format!("{}/v1/me/sites", self.base_url);
        let envelope: SiteListEnvelope = self.get_json("/me/sites", &url).await?;
        debug!(count = envelope.sites.len(), "site list fetched");
        Ok(envelope.sites)
    }

    async fn get_json<T>(&self, endpoint: &'static str, url: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: response.status(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

#[async_trait]
impl StatsSource for WpClient {
    async fn site_stats(&self, site: &Site) -> Result<StatsSnapshot, ApiError> {
        let url = format!("{}/v1.1/sites/{}/stats", self.base_url, site.domain());
        let envelope: StatsEnvelope = self.get_json("/sites/{domain}/stats", &url).await?;

        let views_by_day = envelope
            .visits
            .map(|visits| {
                visits
                    .data
                    .iter()
                    .take(HISTORY_DAYS)
                    .map(|row| views_from_row(row))
                    .collect()
            })
            .unwrap_or_default();

        Ok(StatsSnapshot {
            views_today: envelope.stats.views_today,
            visitors_today: envelope.stats.visitors_today,
            views_yesterday: envelope.stats.views_yesterday,
            visitors_yesterday: envelope.stats.visitors_yesterday,
            views_by_day,
        })
    }
}

/// Views column of one visits row. Missing or non-numeric cells count as
/// zero views for that day.
fn views_from_row(row: &[serde_json::Value]) -> u64 {
    row.get(1)
        .and_then(serde_json::Value::as_f64)
        .map(|views| views.max(0.0) as u64)
        .unwrap_or(0)
}
