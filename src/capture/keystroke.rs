//! Raw keyboard event model for the capture engine.

use serde::{Deserialize, Serialize};

/// Modifier key flags carried by a single keyboard event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt || self.meta
    }

    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Compact summary for structured log fields, e.g. "ctrl+shift".
    pub fn summary(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if self.ctrl {
            parts.push("ctrl");
        }
        if self.shift {
            parts.push("shift");
        }
        if self.alt {
            parts.push("alt");
        }
        if self.meta {
            parts.push("meta");
        }
        parts.join("+")
    }
}

/// A single raw press event as delivered by the platform.
///
/// `key` is the logical identity (layout-dependent: Shift+Comma may arrive
/// as `<`), `code` the physical identity (layout-independent: `Comma`).
/// The normalizer uses `code` to keep shifted punctuation stable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keystroke {
    pub key: String,
    pub code: String,
    pub modifiers: Modifiers,
}

impl Keystroke {
    pub fn new(key: impl Into<String>, code: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            modifiers,
        }
    }

    /// True when the key identity is itself a modifier key. Such presses
    /// contribute to the modifier set only, never to the base label.
    pub fn is_modifier_key(&self) -> bool {
        matches!(self.key.as_str(), "Control" | "Shift" | "Alt" | "Meta")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_identity_detection() {
        let ks = Keystroke::new("Control", "ControlLeft", Modifiers::ctrl());
        assert!(ks.is_modifier_key());

        let ks = Keystroke::new("k", "KeyK", Modifiers::ctrl());
        assert!(!ks.is_modifier_key());
    }

    #[test]
    fn modifiers_any_and_none() {
        assert!(Modifiers::default().none());
        assert!(Modifiers::ctrl().any());
    }

    #[test]
    fn modifiers_summary() {
        let mods = Modifiers {
            ctrl: true,
            shift: true,
            ..Default::default()
        };
        assert_eq!(mods.summary(), "ctrl+shift");
        assert_eq!(Modifiers::default().summary(), "");
    }
}
