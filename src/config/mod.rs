//! Application settings and user preferences.
//!
//! - `defaults` - default constant values
//! - `types` - configuration struct definitions
//! - `loader` - file system loading and saving

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_ALWAYS_ON_TOP, DEFAULT_GLOBAL_HOTKEY, DEFAULT_RUN_ON_STARTUP};
pub use loader::{
    default_settings_path, load_settings, load_settings_from, save_settings, save_settings_to,
    ConfigError,
};
pub use types::{PanelShortcuts, Settings};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
