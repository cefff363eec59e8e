//! Keyboard Listener
//!
//! Reads terminal events and forwards the ones that mean something into
//! the merged dashboard queue. This task never touches widget state; it
//! only translates and sends, so the render loop stays the sole owner of
//! everything visible.

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use pressboard_core::DashboardEvent;

/// Translate one terminal event into a dashboard event.
///
/// Up/Down scroll the list, Esc (or Ctrl-C) quits; everything else is
/// ignored. Only key presses count, so held keys do not double-scroll
/// on release events.
pub fn translate(event: &Event) -> Option<DashboardEvent> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(DashboardEvent::ScrollUp),
        KeyCode::Down => Some(DashboardEvent::ScrollDown),
        KeyCode::Esc => Some(DashboardEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(DashboardEvent::Quit)
        }
        _ => None,
    }
}

/// Forward translated keyboard events into `events`.
///
/// The task ends after sending [`DashboardEvent::Quit`], or as soon as
/// the receiving side goes away.
pub fn spawn_listener(events: mpsc::Sender<DashboardEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut stream = EventStream::new();
        while let Some(Ok(event)) = stream.next().await {
            let Some(event) = translate(&event) else {
                continue;
            };
            trace!(?event, "key event");

            let quit = event == DashboardEvent::Quit;
            if events.send(event).await.is_err() || quit {
                break;
            }
        }
    })
}
