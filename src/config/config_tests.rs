use super::*;
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("settings.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn corrupt_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json").unwrap();
    assert_eq!(load_settings_from(&path), Settings::default());
}

#[test]
fn save_and_load_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.global_hotkey = "Ctrl+Alt+Space".to_string();
    settings.run_on_startup = true;
    settings.keyboard_shortcuts.add_new = "Ctrl+Shift+N".to_string();

    save_settings_to(&path, &settings).unwrap();
    assert_eq!(load_settings_from(&path), settings);
}

#[test]
fn partial_json_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"global_hotkey": "Win+Space"}"#).unwrap();

    let settings = load_settings_from(&path);
    assert_eq!(settings.global_hotkey, "Win+Space");
    assert_eq!(settings.always_on_top, DEFAULT_ALWAYS_ON_TOP);
    assert_eq!(settings.keyboard_shortcuts, PanelShortcuts::default());
}

#[test]
fn default_panel_shortcuts_use_canonical_chords() {
    let shortcuts = PanelShortcuts::default();
    assert_eq!(shortcuts.move_up, "Ctrl+Up");
    assert_eq!(shortcuts.duplicate, "Ctrl+D");
    assert_eq!(shortcuts.delete, "Delete");
}
