//! Fetch Fan-Out
//!
//! One detached task per site. Each task calls the stats source, builds
//! the display model (success or inline-error form), publishes it into
//! the store, and sends a data-ready notification naming the url.
//!
//! Tasks are independent and unordered; the store's per-key replacement
//! is the only synchronization between them. Nothing waits for
//! completion: the dashboard renders the seeded placeholders until
//! results land. A task that fails leaves its site on inline error text;
//! a task that hangs leaves it on the placeholder. Neither touches the
//! other sites.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::StatsSource;
use crate::events::DashboardEvent;
use crate::model::{DisplayModel, Site};
use crate::store::StatsStore;

/// Spawns per-site fetch tasks and publishes their results.
pub struct StatsFetcher<S: StatsSource> {
    source: Arc<S>,
    store: StatsStore,
    events: mpsc::Sender<DashboardEvent>,
}

impl<S: StatsSource> StatsFetcher<S> {
    /// Create a fetcher publishing into `store` and notifying `events`.
    pub fn new(source: Arc<S>, store: StatsStore, events: mpsc::Sender<DashboardEvent>) -> Self {
        Self {
            source,
            store,
            events,
        }
    }

    /// Start one fire-and-forget task per site.
    pub fn spawn_all(&self, sites: Vec<Site>) {
        for site in sites {
            let source = Arc::clone(&self.source);
            let store = self.store.clone();
            let events = self.events.clone();

            tokio::spawn(async move {
                let model = match source.site_stats(&site).await {
                    Ok(snapshot) => {
                        debug!(url = %site.url, "stats fetched");
                        DisplayModel::from_snapshot(&snapshot)
                    }
                    Err(e) => {
                        warn!(url = %site.url, error = %e, "stats fetch failed");
                        DisplayModel::fetch_failed(&e.to_string())
                    }
                };

                store.set(&site.url, model);

                // The render loop may already be gone on quit; a dropped
                // notification is fine, the store holds the result.
                let _ = events
                    .send(DashboardEvent::SiteUpdated { url: site.url })
                    .await;
            });
        }
    }
}
