//! Pressboard - WordPress.com stats dashboard
//!
//! Single entry point, no flags. On first run it prints an authorization
//! URL and blocks reading the pasted code from stdin; on later runs it
//! reads the cached token and goes straight to the dashboard.
//!
//! # Usage
//!
//! ```bash
//! WP_CLIENT_ID=... WP_CLIENT_SECRET=... WP_REDIRECT_URI=... pressboard
//!
//! # With verbose logging (written to the log file, not the screen)
//! RUST_LOG=debug pressboard
//! ```
//!
//! # Environment Variables
//!
//! - `WP_CLIENT_ID` / `WP_CLIENT_SECRET` / `WP_REDIRECT_URI`: OAuth
//!   application values (required)
//! - `PRESSBOARD_TOKEN_FILE`: token cache path override
//! - `PRESSBOARD_LOG`: log file path (default `pressboard.log`)
//! - `RUST_LOG`: log level (trace, debug, info, warn, error)

use std::fs;
use std::io;
use std::sync::Arc;

use anyhow::Context;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::info;

use pressboard_core::{auth, Config, StatsFetcher, StatsStore, WpClient};
use pressboard_tui::{input, App};

/// Depth of the merged event queue. Fetch tasks block briefly if the
/// render loop falls this far behind.
const EVENT_QUEUE_DEPTH: usize = 100;

/// Route log lines to a file; writing them to the terminal would tear
/// the alternate screen.
fn init_logging() -> anyhow::Result<()> {
    let path = std::env::var("PRESSBOARD_LOG").unwrap_or_else(|_| "pressboard.log".to_string());
    let log_file = fs::File::create(&path).with_context(|| format!("creating log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pressboard=info".parse()?)
                .add_directive("pressboard_core=info".parse()?),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("configuration")?;
    let token = auth::obtain_token(&config).await.context("authorization")?;

    let client = WpClient::new(token);
    let sites = client.list_sites().await.context("listing sites")?;
    anyhow::ensure!(!sites.is_empty(), "account has no sites to display");
    info!(count = sites.len(), "starting dashboard");

    let store = StatsStore::seeded(sites.iter().map(|site| site.url.clone()));
    let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_DEPTH);

    // Fire-and-forget: the dashboard starts on placeholders while these
    // complete in any order. In-flight fetches are abandoned on exit.
    StatsFetcher::new(Arc::new(client), store.clone(), events_tx.clone()).spawn_all(sites);
    let listener = input::spawn_listener(events_tx);

    let mut terminal = setup_terminal()?;
    let mut app = App::new(store);
    let result = app.run(&mut terminal, events_rx).await;

    restore_terminal(&mut terminal)?;
    listener.abort();

    result
}
