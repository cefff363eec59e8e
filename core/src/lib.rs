//! Pressboard Core - Headless Stats Aggregation
//!
//! This crate holds everything the dashboard needs except the terminal:
//! OAuth credentials, the WordPress.com REST client, the shared
//! statistics store, and the per-site fetch fan-out. It has **zero**
//! dependencies on any UI framework.
//!
//! # Architecture
//!
//! ```text
//!   site list ──► StatsFetcher ──► one task per site
//!                                      │
//!                        site_stats()  │  (StatsSource)
//!                                      ▼
//!                              StatsStore::set(url, model)
//!                                      │
//!                                      ▼
//!                  DashboardEvent::SiteUpdated { url }  ──► render loop
//! ```
//!
//! Fetch tasks never paint. They publish into [`StatsStore`] and notify
//! the single render loop over one mpsc queue; the loop decides whether
//! the update concerns the visible site. Keyboard input feeds the same
//! queue, so all widget mutation happens in one consumer.
//!
//! # Key Types
//!
//! - [`StatsStore`]: thread-safe url → [`DisplayModel`] map
//! - [`StatsFetcher`]: spawns one fetch task per [`Site`]
//! - [`StatsSource`]: trait seam over the stats API, mockable in tests
//! - [`DashboardEvent`]: the merged event stream's entry type
//! - [`WpClient`]: the real HTTP implementation of [`StatsSource`]

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod events;
pub mod fetch;
pub mod model;
pub mod store;

// Re-exports for convenience
pub use api::{StatsSource, WpClient};
pub use config::Config;
pub use error::{ApiError, AuthError, ConfigError};
pub use events::DashboardEvent;
pub use fetch::StatsFetcher;
pub use model::{DisplayModel, Site, StatsSnapshot, CHART_DAYS, HISTORY_DAYS};
pub use store::StatsStore;

// [`ApiError::Status`] carries a reqwest status; re-exported so callers
// and tests can build one without depending on reqwest directly.
pub use reqwest::StatusCode;
