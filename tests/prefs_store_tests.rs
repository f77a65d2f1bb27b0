//! Integration tests for preference initialization and persistence.

use folio::config::Config;
use folio::prefs::{
    ConfigStorage, Language, MemoryStorage, Origin, PreferenceStore, SystemHints, Theme,
    LANGUAGE_KEY, THEME_KEY,
};

mod fixtures;
use fixtures::*;

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_dark_hint_without_stored_value_starts_dark() {
    let store = PreferenceStore::initialize(MemoryStorage::new(), &dark_hints());

    assert_eq!(store.get().theme, Theme::Dark);
    assert_eq!(store.theme_origin(), Origin::System);
}

#[test]
fn test_stored_light_beats_dark_hint() {
    let store = PreferenceStore::initialize(stored(Some(Theme::Light), None), &dark_hints());

    assert_eq!(store.get().theme, Theme::Light);
    assert_eq!(store.theme_origin(), Origin::Stored);
}

#[test]
fn test_axes_resolve_independently() {
    let store = PreferenceStore::initialize(
        stored(Some(Theme::Dark), None),
        &spanish_light_hints(),
    );

    let preference = store.get();
    assert_eq!(preference.theme, Theme::Dark);
    assert_eq!(preference.language, Language::Spanish);
    assert_eq!(store.language_origin(), Origin::System);
}

#[test]
fn test_garbage_in_storage_is_not_fatal() {
    let storage = MemoryStorage::with_entries([(THEME_KEY, "sepia"), (LANGUAGE_KEY, "klingon")]);
    let store = PreferenceStore::initialize(storage, &SystemHints::none());

    assert_eq!(store.get().theme, Theme::Light);
    assert_eq!(store.get().language, Language::English);
    assert_eq!(store.theme_origin(), Origin::Default);
}

#[test]
fn test_broken_storage_still_gives_a_preference() {
    let store = PreferenceStore::initialize(MemoryStorage::broken(), &dark_hints());

    assert_eq!(store.get().theme, Theme::Dark);
    store.set_theme(Theme::Light);
    assert_eq!(store.get().theme, Theme::Light);
}

// ============================================================================
// Persistence through the config file
// ============================================================================

#[test]
fn test_theme_survives_restart_via_config_file() {
    let (_dir, path) = temp_config_dir();

    let store = PreferenceStore::initialize(ConfigStorage::at(&path), &SystemHints::none());
    store.set_theme(Theme::Dark);
    store.set_language(Language::Spanish);
    drop(store);

    let config = Config::load_from(&path).expect("config should be readable");
    assert_eq!(config.ui.theme.as_deref(), Some("dark"));
    assert_eq!(config.ui.language.as_deref(), Some("es"));

    let reopened = PreferenceStore::initialize(ConfigStorage::at(&path), &SystemHints::none());
    assert_eq!(reopened.get().theme, Theme::Dark);
    assert_eq!(reopened.get().language, Language::Spanish);
}

#[test]
fn test_config_storage_keeps_other_settings() {
    let (_dir, path) = temp_config_dir();
    let mut config = Config::default();
    config.ui.show_help_on_startup = false;
    config.scroll.row_height_px = 20.0;
    config.save_to(&path).unwrap();

    let store = PreferenceStore::initialize(ConfigStorage::at(&path), &SystemHints::none());
    store.toggle_theme();

    let config = Config::load_from(&path).unwrap();
    assert!(!config.ui.show_help_on_startup);
    assert!((config.scroll.row_height_px - 20.0).abs() < f64::EPSILON);
    assert_eq!(config.ui.theme.as_deref(), Some("dark"));
}

#[test]
fn test_system_hint_is_never_persisted() {
    let (_dir, path) = temp_config_dir();
    let store = PreferenceStore::initialize(ConfigStorage::at(&path), &SystemHints::none());

    assert!(store.apply_system_hint(&dark_hints()));
    assert_eq!(store.get().theme, Theme::Dark);
    assert!(!path.exists());
}

#[test]
fn test_system_hint_ignored_after_user_choice() {
    let store = blank_store();
    store.set_theme(Theme::Light);

    assert!(!store.apply_system_hint(&dark_hints()));
    assert_eq!(store.get().theme, Theme::Light);
}

#[test]
fn test_language_change_repairs_corrupt_theme_entry() {
    let (_dir, path) = temp_config_dir();
    std::fs::write(&path, "[ui]\ntheme = \"sepia\"\n").unwrap();

    let store = PreferenceStore::initialize(ConfigStorage::at(&path), &dark_hints());
    assert_eq!(store.get().theme, Theme::Dark);
    store.set_language(Language::Spanish);

    let config = Config::load_from(&path).expect("repaired config should load");
    assert_eq!(config.ui.language.as_deref(), Some("es"));
    assert_eq!(config.ui.theme, None);
}
