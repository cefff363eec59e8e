//! Site Statistics Data Model
//!
//! The three shapes that flow through the system:
//!
//! - [`Site`]: one entry from the account's site list, decoded straight
//!   from the API.
//! - [`StatsSnapshot`]: the decoded result of one stats fetch. Immutable
//!   once constructed.
//! - [`DisplayModel`]: the render-ready form of a snapshot (or of a fetch
//!   that has not finished, or that failed). Stored per site and replaced
//!   wholesale, never mutated in place.

use serde::Deserialize;

/// Number of daily entries the stats endpoint reports.
pub const HISTORY_DAYS: usize = 30;

/// Trailing window of daily views shown in the bar chart.
pub const CHART_DAYS: usize = 20;

/// One site from the authenticated account's site list.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Site {
    /// Numeric site identifier assigned by WordPress.com.
    #[serde(rename = "ID")]
    pub id: u64,
    /// Canonical URL, e.g. `https://example.wordpress.com`.
    #[serde(rename = "URL")]
    pub url: String,
}

impl Site {
    /// Hostname portion of the URL, in the form the stats endpoint expects.
    pub fn domain(&self) -> &str {
        self.url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
    }
}

/// Decoded statistics for one site.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Views recorded today.
    pub views_today: u64,
    /// Unique visitors recorded today.
    pub visitors_today: u64,
    /// Views recorded yesterday.
    pub views_yesterday: u64,
    /// Unique visitors recorded yesterday.
    pub visitors_yesterday: u64,
    /// Daily view counts, oldest first, at most [`HISTORY_DAYS`] entries.
    pub views_by_day: Vec<u64>,
}

/// Render-ready representation of one site's statistics.
///
/// One model exists per site at any time. Fetch tasks replace it wholesale
/// through the store; nothing mutates it in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayModel {
    /// Formatted detail text, or a placeholder / inline error line.
    pub description: String,
    /// Trailing [`CHART_DAYS`] window of daily views, oldest first.
    pub series: Vec<u64>,
}

impl DisplayModel {
    /// The model every site starts with, before its fetch completes.
    pub fn placeholder() -> Self {
        Self {
            description: "Fetching stats...".to_string(),
            series: Vec::new(),
        }
    }

    /// Build the display form of a successful fetch.
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        let description = format!(
            "Stats:\n\nToday:\t Views: {}\t Visitors: {}\nYesterday:\t Views: {}\t Visitors: {}\n",
            snapshot.views_today,
            snapshot.visitors_today,
            snapshot.views_yesterday,
            snapshot.visitors_yesterday,
        );
        let start = snapshot.views_by_day.len().saturating_sub(CHART_DAYS);
        Self {
            description,
            series: snapshot.views_by_day[start..].to_vec(),
        }
    }

    /// Build the inline-error form of a failed fetch.
    pub fn fetch_failed(error: &str) -> Self {
        Self {
            description: format!("Stats unavailable: {error}"),
            series: Vec::new(),
        }
    }

    /// True when the series has entries and every one of them is zero.
    ///
    /// An all-zero series must never reach the chart widget; callers keep
    /// the previous series on screen instead. An empty series does not
    /// count as all-zero.
    pub fn is_all_zero(&self) -> bool {
        !self.series.is_empty() && self.series.iter().all(|&v| v == 0)
    }
}

impl Default for DisplayModel {
    fn default() -> Self {
        Self::placeholder()
    }
}
