//! Chord assembly and sequence formatting.

use super::keystroke::Keystroke;
use super::normalizer;

/// Separator between finalized chords in the emitted shortcut value.
pub const SEQUENCE_SEPARATOR: &str = ", ";

/// Build the canonical chord string for a press: modifiers in fixed order
/// (Ctrl, Shift, Alt, Win), then the base label, joined with `+`.
///
/// Returns `None` when the press cannot form a chord, either because no
/// modifier is held or because the key is itself a modifier.
pub fn build_chord(keystroke: &Keystroke) -> Option<String> {
    if keystroke.modifiers.none() {
        return None;
    }

    let label = normalizer::base_label(keystroke)?;

    let mods = keystroke.modifiers;
    let mut parts: Vec<&str> = Vec::with_capacity(5);
    if mods.ctrl {
        parts.push("Ctrl");
    }
    if mods.shift {
        parts.push("Shift");
    }
    if mods.alt {
        parts.push("Alt");
    }
    if mods.meta {
        parts.push("Win");
    }
    parts.push(&label);
    Some(parts.join("+"))
}

/// Join finalized chords into the externally visible shortcut value.
pub fn join_sequence(chords: &[String]) -> String {
    chords.join(SEQUENCE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::keystroke::Modifiers;

    #[test]
    fn modifier_order_is_fixed() {
        let ks = Keystroke::new(
            "k",
            "KeyK",
            Modifiers {
                ctrl: true,
                shift: true,
                alt: true,
                meta: true,
            },
        );
        assert_eq!(build_chord(&ks).unwrap(), "Ctrl+Shift+Alt+Win+K");
    }

    #[test]
    fn meta_renders_as_win() {
        let ks = Keystroke::new(
            "d",
            "KeyD",
            Modifiers {
                meta: true,
                ..Default::default()
            },
        );
        assert_eq!(build_chord(&ks).unwrap(), "Win+D");
    }

    #[test]
    fn no_modifiers_means_no_chord() {
        let ks = Keystroke::new("k", "KeyK", Modifiers::default());
        assert_eq!(build_chord(&ks), None);
    }

    #[test]
    fn bare_modifier_press_means_no_chord() {
        let ks = Keystroke::new("Control", "ControlLeft", Modifiers::ctrl());
        assert_eq!(build_chord(&ks), None);
    }

    #[test]
    fn sequence_joins_with_comma_space() {
        let chords = vec!["Ctrl+K".to_string(), "Ctrl+D".to_string()];
        assert_eq!(join_sequence(&chords), "Ctrl+K, Ctrl+D");
        assert_eq!(join_sequence(&[]), "");
    }
}
