//! Capture session state machine.
//!
//! A reducer over the raw event stream. Every entry point mutates the
//! session and returns the side effects the owner must perform, as data:
//! listener attach/detach, value emission, focus advance. The reducer itself
//! performs no I/O and never fails.
//!
//! # States
//!
//! - `Idle` - listeners detached; the initial state, re-entered after every
//!   blur, commit, or mode switch.
//! - `Capturing` - listeners attached; press/release events build chords.
//!
//! Losing focus is the only cancellation signal. It discards the preview and
//! sequence without emitting, so an abandoned session never overwrites the
//! caller's last committed value.

use smallvec::SmallVec;

use super::chord;
use super::keystroke::Keystroke;

/// Finalized chords a sequence holds before rollover restarts it.
pub const MAX_SEQUENCE_CHORDS: usize = 2;

/// Whether the field intercepts keys or behaves as ordinary text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureMode {
    #[default]
    Capture,
    Manual,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Capturing,
}

/// Side effects requested by a transition, performed by the owner in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Attach global press/release listeners.
    AttachListeners,
    /// Detach global press/release listeners.
    DetachListeners,
    /// Deliver an updated shortcut value to the caller.
    Emit(String),
    /// Ask the surrounding form to move focus to the next field.
    AdvanceFocus,
}

pub type Effects = SmallVec<[Effect; 2]>;

#[derive(Debug, Default)]
pub struct CaptureSession {
    mode: CaptureMode,
    state: SessionState,
    preview: String,
    sequence: Vec<String>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_capturing(&self) -> bool {
        self.state == SessionState::Capturing
    }

    /// The in-progress chord, empty when no valid combination is held.
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Finalized chords of the current session.
    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    /// Field gained focus. Starts a session only in capture mode.
    pub fn focus(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.mode == CaptureMode::Capture && self.state == SessionState::Idle {
            self.state = SessionState::Capturing;
            effects.push(Effect::AttachListeners);
        }
        effects
    }

    /// Field lost focus. Discards unfinished work without emitting.
    pub fn blur(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.state == SessionState::Capturing {
            effects.push(Effect::DetachListeners);
        }
        self.state = SessionState::Idle;
        self.preview.clear();
        self.sequence.clear();
        effects
    }

    /// Explicit mode switch. Forces idle and clears all transient state on
    /// every path, so listeners can never leak across modes.
    pub fn set_mode(&mut self, mode: CaptureMode) -> Effects {
        let mut effects = Effects::new();
        if self.state == SessionState::Capturing {
            effects.push(Effect::DetachListeners);
        }
        self.mode = mode;
        self.state = SessionState::Idle;
        self.preview.clear();
        self.sequence.clear();
        effects
    }

    /// One press event. Bare Backspace edits, bare Enter/Tab commits,
    /// everything else recomputes the live preview from scratch.
    pub fn key_down(&mut self, keystroke: &Keystroke) -> Effects {
        if self.state != SessionState::Capturing {
            return Effects::new();
        }

        let bare = keystroke.modifiers.none();
        if bare && keystroke.key == "Backspace" {
            return self.undo_last();
        }
        if bare && (keystroke.key == "Enter" || keystroke.key == "Tab") {
            return self.commit();
        }

        // Re-entrant: the preview always reflects the most recent press. A
        // press that cannot form a chord (no modifiers, or a bare modifier
        // key) leaves it empty.
        self.preview = chord::build_chord(keystroke).unwrap_or_default();
        Effects::new()
    }

    /// One release event. Finalizes the held chord, if any. Key-repeat
    /// presses without an intervening release never reach this point twice.
    pub fn key_up(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.state != SessionState::Capturing || self.preview.is_empty() {
            return effects;
        }

        if self.sequence.len() >= MAX_SEQUENCE_CHORDS {
            // Rollover: the whole sequence restarts with the newest chord.
            self.sequence.clear();
        }
        self.sequence.push(std::mem::take(&mut self.preview));
        effects.push(Effect::Emit(chord::join_sequence(&self.sequence)));
        effects
    }

    /// Bare Backspace: cancel the in-progress chord first, otherwise drop
    /// the last finalized chord and re-emit.
    fn undo_last(&mut self) -> Effects {
        let mut effects = Effects::new();
        if !self.preview.is_empty() {
            self.preview.clear();
            return effects;
        }
        if self.sequence.pop().is_some() {
            effects.push(Effect::Emit(chord::join_sequence(&self.sequence)));
        }
        effects
    }

    /// Bare Enter/Tab: flush the pending chord, emit, end the session, and
    /// hand focus onward. The capacity cap does not apply to the flush.
    fn commit(&mut self) -> Effects {
        let mut effects = Effects::new();
        if !self.preview.is_empty() {
            self.sequence.push(std::mem::take(&mut self.preview));
        }
        if !self.sequence.is_empty() {
            effects.push(Effect::Emit(chord::join_sequence(&self.sequence)));
        }
        self.state = SessionState::Idle;
        self.preview.clear();
        self.sequence.clear();
        effects.push(Effect::DetachListeners);
        effects.push(Effect::AdvanceFocus);
        effects
    }

    /// Live display string: finalized chords plus the in-progress preview.
    pub fn display(&self) -> String {
        let mut parts: Vec<&str> = self.sequence.iter().map(String::as_str).collect();
        if !self.preview.is_empty() {
            parts.push(&self.preview);
        }
        parts.join(chord::SEQUENCE_SEPARATOR)
    }
}
