//! Unit tests for the SettingsEngine public API.
//!
//! Uses temporary directories so every test gets its own config file.

use tempfile::TempDir;

use readhub::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use readhub::types::settings::{ReaderSettings, StartPage, ThemeMode};

fn engine_in(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    assert_eq!(engine.load().unwrap(), ReaderSettings::default());
}

#[test]
fn test_changes_survive_reload() {
    let dir = TempDir::new().unwrap();

    let mut engine = engine_in(&dir);
    engine.load().unwrap();
    engine
        .set_value("appearance.theme", serde_json::json!("Light"))
        .unwrap();
    engine
        .set_value("general.start_page", serde_json::json!("LastRead"))
        .unwrap();

    let mut engine2 = engine_in(&dir);
    let loaded = engine2.load().unwrap();
    assert_eq!(loaded.appearance.theme, ThemeMode::Light);
    assert_eq!(loaded.general.start_page, StartPage::LastRead);
}

#[test]
fn test_reset_writes_defaults_to_disk() {
    let dir = TempDir::new().unwrap();

    let mut engine = engine_in(&dir);
    engine.load().unwrap();
    engine
        .set_value("reading.show_quiz", serde_json::json!(false))
        .unwrap();
    engine.reset().unwrap();

    let mut engine2 = engine_in(&dir);
    assert_eq!(engine2.load().unwrap(), ReaderSettings::default());
}

#[test]
fn test_unknown_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    engine.load().unwrap();

    assert!(engine
        .set_value("reading.page_turn_sound", serde_json::json!(true))
        .is_err());
    // The settings were not disturbed
    assert_eq!(*engine.get_settings(), ReaderSettings::default());
}

#[test]
fn test_mistyped_value_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    engine.load().unwrap();

    assert!(engine
        .set_value("appearance.font_size", serde_json::json!("huge"))
        .is_err());
    assert_eq!(engine.get_settings().appearance.font_size, 16);
}

#[test]
fn test_corrupt_file_reports_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "][ nope").unwrap();

    let mut engine = engine_in(&dir);
    assert!(engine.load().is_err());
}
