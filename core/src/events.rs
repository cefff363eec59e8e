//! Dashboard Events
//!
//! The merged event stream consumed by the render loop. Keyboard input
//! and fetch completions both funnel into one `tokio::sync::mpsc` queue,
//! so exactly one consumer ever touches selection or widget state and
//! events are handled strictly in arrival order.

/// One entry in the merged event stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Move the selection up one row.
    ScrollUp,
    /// Move the selection down one row.
    ScrollDown,
    /// A fetch task replaced the display model for this site.
    SiteUpdated {
        /// Store key of the site that changed.
        url: String,
    },
    /// Leave the dashboard and end the process.
    Quit,
}
