//! Default configuration values.

pub const DEFAULT_GLOBAL_HOTKEY: &str = "Ctrl+Shift+K";
pub const DEFAULT_ALWAYS_ON_TOP: bool = true;
pub const DEFAULT_RUN_ON_STARTUP: bool = false;

// Panel navigation defaults, in the capture engine's canonical format.
pub const DEFAULT_MOVE_UP: &str = "Ctrl+Up";
pub const DEFAULT_MOVE_DOWN: &str = "Ctrl+Down";
pub const DEFAULT_DUPLICATE: &str = "Ctrl+D";
pub const DEFAULT_DELETE: &str = "Delete";
pub const DEFAULT_ADD_NEW: &str = "Ctrl+N";
