//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Keyboard shortcuts for navigating the settings panel itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelShortcuts {
    #[serde(default = "default_move_up")]
    pub move_up: String,
    #[serde(default = "default_move_down")]
    pub move_down: String,
    #[serde(default = "default_duplicate")]
    pub duplicate: String,
    #[serde(default = "default_delete")]
    pub delete: String,
    #[serde(default = "default_add_new")]
    pub add_new: String,
}

fn default_move_up() -> String {
    DEFAULT_MOVE_UP.to_string()
}
fn default_move_down() -> String {
    DEFAULT_MOVE_DOWN.to_string()
}
fn default_duplicate() -> String {
    DEFAULT_DUPLICATE.to_string()
}
fn default_delete() -> String {
    DEFAULT_DELETE.to_string()
}
fn default_add_new() -> String {
    DEFAULT_ADD_NEW.to_string()
}

impl Default for PanelShortcuts {
    fn default() -> Self {
        PanelShortcuts {
            move_up: DEFAULT_MOVE_UP.to_string(),
            move_down: DEFAULT_MOVE_DOWN.to_string(),
            duplicate: DEFAULT_DUPLICATE.to_string(),
            delete: DEFAULT_DELETE.to_string(),
            add_new: DEFAULT_ADD_NEW.to_string(),
        }
    }
}

/// User settings persisted to `settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Accelerator that summons the popup; stored opaquely.
    #[serde(default = "default_global_hotkey")]
    pub global_hotkey: String,
    #[serde(default = "default_always_on_top")]
    pub always_on_top: bool,
    #[serde(default = "default_run_on_startup")]
    pub run_on_startup: bool,
    #[serde(default)]
    pub keyboard_shortcuts: PanelShortcuts,
}

fn default_global_hotkey() -> String {
    DEFAULT_GLOBAL_HOTKEY.to_string()
}
fn default_always_on_top() -> bool {
    DEFAULT_ALWAYS_ON_TOP
}
fn default_run_on_startup() -> bool {
    DEFAULT_RUN_ON_STARTUP
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            global_hotkey: DEFAULT_GLOBAL_HOTKEY.to_string(),
            always_on_top: DEFAULT_ALWAYS_ON_TOP,
            run_on_startup: DEFAULT_RUN_ON_STARTUP,
            keyboard_shortcuts: PanelShortcuts::default(),
        }
    }
}
