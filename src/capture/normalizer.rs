//! Base-key label resolution.
//!
//! Maps the raw identity of a press to the canonical label that appears in a
//! chord string. Resolution order:
//!
//! 1. Fixed names for non-printable keys, by logical identity
//! 2. Physical-key table for shifted punctuation and the digit row, so the
//!    label is stable whether or not Shift changed the glyph
//! 3. Any single printable character, uppercased
//! 4. Fallback: the raw identity, unmodified
//!
//! Unknown keys are never an error; they fall through to their raw name.

use super::keystroke::Keystroke;

/// Resolve the canonical base-key label for a press.
///
/// Returns `None` when the key identity is itself a modifier.
pub fn base_label(keystroke: &Keystroke) -> Option<String> {
    if keystroke.is_modifier_key() {
        return None;
    }

    if let Some(named) = named_key_label(&keystroke.key) {
        return Some(named.to_string());
    }

    if let Some(label) = physical_key_label(&keystroke.code) {
        return Some(label.to_string());
    }

    if keystroke.key.chars().count() == 1 {
        return Some(keystroke.key.to_uppercase());
    }

    Some(keystroke.key.clone())
}

/// Display names for non-printable keys, keyed by logical identity.
fn named_key_label(key: &str) -> Option<&'static str> {
    Some(match key {
        " " => "Space",
        "Enter" => "Enter",
        "Escape" => "Esc",
        "Backspace" => "Backspace",
        "Delete" => "Delete",
        "Tab" => "Tab",
        "ArrowUp" => "Up",
        "ArrowDown" => "Down",
        "ArrowLeft" => "Left",
        "ArrowRight" => "Right",
        _ => return None,
    })
}

/// Labels for keys whose glyph Shift would otherwise change, keyed by
/// physical identity.
fn physical_key_label(code: &str) -> Option<&'static str> {
    Some(match code {
        "Backquote" => "`",
        "Minus" => "-",
        "Equal" => "=",
        "BracketLeft" => "[",
        "BracketRight" => "]",
        "Backslash" => "\\",
        "Semicolon" => ";",
        "Quote" => "'",
        "Comma" => ",",
        "Period" => ".",
        "Slash" => "/",
        "Digit0" => "0",
        "Digit1" => "1",
        "Digit2" => "2",
        "Digit3" => "3",
        "Digit4" => "4",
        "Digit5" => "5",
        "Digit6" => "6",
        "Digit7" => "7",
        "Digit8" => "8",
        "Digit9" => "9",
        _ => return None,
    })
}
