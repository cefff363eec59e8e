//! Pressboard TUI - Terminal dashboard for WordPress.com site stats
//!
//! Three panes: the site list, a detail pane for the selected site, and a
//! bar chart of the selected site's trailing daily views.
//!
//! # Architecture
//!
//! - **App**: owns selection and chart state, drains the merged event
//!   queue, and is the only place a paint is issued
//! - **Input**: translates terminal key events and forwards them into the
//!   same queue the fetch tasks publish to
//! - **Ui**: pure layout/painting functions over the app state

pub mod app;
pub mod input;
pub mod ui;

pub use app::{App, Repaint};
