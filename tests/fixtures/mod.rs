//! Shared fixtures for integration tests.
#![allow(dead_code)] // Not every test file uses every fixture

use folio::config::{Config, ScrollConfig};
use folio::i18n::Translator;
use folio::prefs::{
    Language, MemoryStorage, PreferenceStore, SystemHints, Theme, LANGUAGE_KEY, THEME_KEY,
};
use folio::router::Route;
use folio::scroll::{FrameClock, ScrollTracker, SectionLayout, TrackerSettings, Viewport};
use folio::tui::{AppState, MemoryClipboard};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Terminal size used by viewer tests.
pub const TERMINAL: (u16, u16) = (100, 30);

/// Fixed footer year so rendered output is stable.
pub const YEAR: i32 = 2026;

/// Path to the folio binary (set by cargo at compile time)
pub fn folio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_folio")
}

/// Command running folio against an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(folio_bin());
    cmd.env("FOLIO_CONFIG_DIR", config_dir);
    cmd.env_remove("FOLIO_LOG");
    cmd.args(args);
    cmd
}

/// Fresh temp directory plus the config file path inside it.
pub fn temp_config_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    (dir, path)
}

/// OS hints reporting a dark color scheme and no locale.
pub fn dark_hints() -> SystemHints {
    SystemHints {
        prefers_dark: Some(true),
        locale: None,
    }
}

/// OS hints reporting a light color scheme and a Spanish locale.
pub fn spanish_light_hints() -> SystemHints {
    SystemHints {
        prefers_dark: Some(false),
        locale: Some("es-CR".to_string()),
    }
}

/// Storage pre-filled with a theme and/or language.
pub fn stored(theme: Option<Theme>, language: Option<Language>) -> MemoryStorage {
    let mut entries = Vec::new();
    if let Some(theme) = theme {
        entries.push((THEME_KEY, theme.as_str()));
    }
    if let Some(language) = language {
        entries.push((LANGUAGE_KEY, language.code()));
    }
    MemoryStorage::with_entries(entries)
}

/// Store over empty memory storage with no OS hints.
pub fn blank_store() -> PreferenceStore {
    PreferenceStore::initialize(MemoryStorage::new(), &SystemHints::none())
}

/// Config with the startup help overlay disabled.
pub fn quiet_config() -> Config {
    let mut config = Config::default();
    config.ui.show_help_on_startup = false;
    config
}

/// Viewer at `route` over `store`, with a memory clipboard.
pub fn viewer(store: PreferenceStore, route: Route) -> (AppState, MemoryClipboard) {
    let clipboard = MemoryClipboard::default();
    let state = AppState::new(
        store,
        Translator::bundled(),
        &quiet_config(),
        route,
        Box::new(clipboard.clone()),
        TERMINAL,
    )
    .with_hint_source(Box::new(SystemHints::none))
    .with_year(YEAR);
    (state, clipboard)
}

/// Viewport, clock and tracker over `layout` with default scroll settings.
pub fn tracked(viewport_height: f64, layout: SectionLayout) -> (Viewport, FrameClock, ScrollTracker) {
    let viewport = Viewport::new(viewport_height);
    viewport.resize(viewport_height, layout.content_height());
    let clock = FrameClock::new();
    let settings =
        TrackerSettings::from_config(&ScrollConfig::default()).with_reveal_section("portfolio");
    let tracker = ScrollTracker::new(&viewport, &clock, settings, layout);
    (viewport, clock, tracker)
}

/// Hero, about-me and portfolio stacked from the top of the document.
pub fn home_layout() -> SectionLayout {
    SectionLayout::stacked(
        0.0,
        [("hero", 600.0), ("about-me", 900.0), ("portfolio", 1500.0)],
    )
}
