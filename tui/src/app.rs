//! Dashboard Application
//!
//! The App owns every piece of mutable UI state: the selected row, the
//! chart series, and the running flag. [`App::run`] is the single
//! consumer of the merged event queue; events are handled strictly one
//! at a time in arrival order, and no paint is ever issued from anywhere
//! else. Fetch tasks never race the keyboard on widget state; they only
//! send [`DashboardEvent::SiteUpdated`] and let this loop decide whether
//! anything visible changed.

use std::io;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::debug;

use pressboard_core::{DashboardEvent, DisplayModel, StatsStore};

use crate::ui;

/// What a handled event requires the terminal to repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repaint {
    /// Nothing visible changed; no paint is issued.
    Skip,
    /// The selection moved: list highlight, detail pane and chart.
    Selection,
    /// The visible site's model changed: detail pane, plus the chart
    /// when its series was refreshed.
    Detail {
        /// Whether the chart series was refreshed as well.
        chart: bool,
    },
}

/// Dashboard state owned by the render loop.
pub struct App {
    store: StatsStore,
    /// Store keys, sorted ascending; stable for the whole run.
    urls: Vec<String>,
    /// Index into `urls`; clamped to bounds, never wraps.
    selected: usize,
    /// Series behind the bar chart. Replaced only by a series that is
    /// not all zeros; an all-zero update leaves the previous series on
    /// screen.
    chart: Vec<u64>,
    running: bool,
}

impl App {
    /// Create the app over a seeded store.
    pub fn new(store: StatsStore) -> Self {
        let urls = store.sorted_keys();
        let mut app = Self {
            store,
            urls,
            selected: 0,
            chart: Vec::new(),
            running: true,
        };
        app.refresh_chart();
        app
    }

    /// Sorted site urls backing the list widget.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Selected row index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Currently selected url, if the site list is non-empty.
    pub fn selected_url(&self) -> Option<&str> {
        self.urls.get(self.selected).map(String::as_str)
    }

    /// Model for the selected site (the placeholder until its fetch lands).
    pub fn selected_model(&self) -> DisplayModel {
        self.selected_url()
            .map(|url| self.store.get(url))
            .unwrap_or_default()
    }

    /// Chart series currently on screen.
    pub fn chart(&self) -> &[u64] {
        &self.chart
    }

    /// Whether the event loop should keep running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply one event and report what must be repainted.
    pub fn handle_event(&mut self, event: DashboardEvent) -> Repaint {
        match event {
            DashboardEvent::ScrollUp => self.scroll(false),
            DashboardEvent::ScrollDown => self.scroll(true),
            DashboardEvent::SiteUpdated { url } => self.site_updated(&url),
            DashboardEvent::Quit => {
                self.running = false;
                Repaint::Skip
            }
        }
    }

    /// Drain the merged event stream, painting after each relevant event.
    ///
    /// The first paint happens before any event arrives: the seeded
    /// placeholders make the dashboard renderable immediately.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut events: mpsc::Receiver<DashboardEvent>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| ui::draw(frame, self))?;

        while self.running {
            let Some(event) = events.recv().await else {
                // All senders gone; nothing further can change.
                break;
            };
            debug!(?event, "dashboard event");

            if self.handle_event(event) != Repaint::Skip {
                terminal.draw(|frame| ui::draw(frame, self))?;
            }
        }

        Ok(())
    }

    fn scroll(&mut self, down: bool) -> Repaint {
        let last = self.urls.len().saturating_sub(1);
        self.selected = if down {
            (self.selected + 1).min(last)
        } else {
            self.selected.saturating_sub(1)
        };
        self.refresh_chart();
        Repaint::Selection
    }

    fn site_updated(&mut self, url: &str) -> Repaint {
        if self.selected_url() != Some(url) {
            // Off-screen update: the store already holds it, and the
            // visible panes did not change.
            return Repaint::Skip;
        }
        let chart = self.refresh_chart();
        Repaint::Detail { chart }
    }

    /// Pull the selected site's series into the chart, unless the series
    /// is all zeros. Returns whether the chart changed.
    fn refresh_chart(&mut self) -> bool {
        let model = self.selected_model();
        if model.is_all_zero() {
            return false;
        }
        self.chart = model.series;
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn three_site_app() -> App {
        App::new(StatsStore::seeded(["b.com", "a.com", "c.com"]))
    }

    #[test]
    fn test_urls_are_sorted_at_startup() {
        let app = three_site_app();
        let urls: Vec<&str> = app.urls().iter().map(String::as_str).collect();
        assert_eq!(urls, ["a.com", "b.com", "c.com"]);
        assert_eq!(app.selected_url(), Some("a.com"));
    }

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut app = three_site_app();

        assert_eq!(app.handle_event(DashboardEvent::ScrollUp), Repaint::Selection);
        assert_eq!(app.selected(), 0, "no wraparound at the top");

        for _ in 0..5 {
            app.handle_event(DashboardEvent::ScrollDown);
        }
        assert_eq!(app.selected(), 2, "no wraparound at the bottom");
    }

    #[test]
    fn test_update_for_unselected_site_skips_repaint() {
        let mut app = three_site_app();
        let repaint = app.handle_event(DashboardEvent::SiteUpdated {
            url: "b.com".to_string(),
        });
        assert_eq!(repaint, Repaint::Skip);
    }

    #[test]
    fn test_update_for_selected_site_repaints_detail() {
        let store = StatsStore::seeded(["a.com", "b.com", "c.com"]);
        let mut app = App::new(store.clone());

        // An empty series is not all-zero: the chart is blanked, not
        // left showing a stale neighbor.
        store.set("a.com", DisplayModel::fetch_failed("timed out"));
        let repaint = app.handle_event(DashboardEvent::SiteUpdated {
            url: "a.com".to_string(),
        });
        assert_eq!(repaint, Repaint::Detail { chart: true });
        assert!(app.chart().is_empty());
        assert!(app
            .selected_model()
            .description
            .starts_with("Stats unavailable:"));
    }

    #[test]
    fn test_all_zero_series_never_reaches_chart() {
        let store = StatsStore::seeded(["a.com"]);
        let mut app = App::new(store.clone());

        store.set(
            "a.com",
            DisplayModel {
                description: "quiet".to_string(),
                series: vec![0; 20],
            },
        );
        let repaint = app.handle_event(DashboardEvent::SiteUpdated {
            url: "a.com".to_string(),
        });
        assert_eq!(repaint, Repaint::Detail { chart: false });
        assert!(app.chart().is_empty(), "all-zero series was dropped");

        let mut series = vec![0u64; 20];
        series[19] = 5;
        store.set(
            "a.com",
            DisplayModel {
                description: "busy".to_string(),
                series: series.clone(),
            },
        );
        let repaint = app.handle_event(DashboardEvent::SiteUpdated {
            url: "a.com".to_string(),
        });
        assert_eq!(repaint, Repaint::Detail { chart: true });
        assert_eq!(app.chart(), series);
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let mut app = three_site_app();
        assert!(app.is_running());
        assert_eq!(app.handle_event(DashboardEvent::Quit), Repaint::Skip);
        assert!(!app.is_running());
    }

    #[test]
    fn test_empty_site_list_is_inert() {
        let mut app = App::new(StatsStore::new());
        assert_eq!(app.selected_url(), None);
        assert_eq!(app.selected_model(), DisplayModel::placeholder());
        app.handle_event(DashboardEvent::ScrollDown);
        assert_eq!(app.selected(), 0);
    }
}
