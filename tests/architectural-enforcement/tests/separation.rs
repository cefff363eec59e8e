//! Core/Surface Separation Tests
//!
//! The core crate must be usable headless, and all widget mutation and
//! painting must stay inside the single render loop. These tests scan
//! the source tree so a violation fails CI instead of surfacing as a
//! rendering race later.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .canonicalize()
        .expect("workspace root")
}

fn rust_sources(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|entry| entry.into_path())
        .collect()
}

/// The core crate must never name a terminal/UI crate, in code or in
/// manifest.
#[test]
fn core_is_ui_free() {
    let core = workspace_root().join("core");
    assert!(core.is_dir(), "core crate missing at {core:?}");

    let mut checked = 0;
    for path in rust_sources(&core.join("src")) {
        let source = fs::read_to_string(&path).expect("readable source");
        for forbidden in ["ratatui", "crossterm"] {
            assert!(
                !source.contains(forbidden),
                "{} references {forbidden}; core must stay headless",
                path.display()
            );
        }
        checked += 1;
    }
    assert!(checked >= 5, "expected to scan the core modules, saw {checked}");

    let manifest = fs::read_to_string(core.join("Cargo.toml")).expect("core manifest");
    for forbidden in ["ratatui", "crossterm"] {
        assert!(
            !manifest.contains(forbidden),
            "core/Cargo.toml depends on {forbidden}"
        );
    }
}

/// Exactly one source file may issue a paint: the render loop. Everything
/// else composes state and hands it over.
#[test]
fn only_the_render_loop_paints() {
    let tui_src = workspace_root().join("tui").join("src");

    let mut painters = Vec::new();
    for path in rust_sources(&tui_src) {
        let source = fs::read_to_string(&path).expect("readable source");
        if source.contains("terminal.draw(") {
            painters.push(path);
        }
    }

    assert_eq!(
        painters.len(),
        1,
        "paints must be issued from one place, found {painters:?}"
    );
    assert!(
        painters[0].ends_with("app.rs"),
        "the painting file moved: {painters:?}"
    );
}

/// The fetch fan-out must not import anything from the TUI side.
#[test]
fn fetch_code_never_touches_widgets() {
    let fetch = workspace_root().join("core").join("src").join("fetch.rs");
    let source = fs::read_to_string(&fetch).expect("fetch module");
    assert!(
        !source.contains("pressboard_tui"),
        "core fetch module imports the TUI crate"
    );
    assert!(
        source.contains("DashboardEvent::SiteUpdated"),
        "fetch tasks must notify through the event queue"
    );
}
