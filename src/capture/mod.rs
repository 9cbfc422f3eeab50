//! Key-combination capture engine.
//!
//! Turns a live stream of raw press/release events into a canonical shortcut
//! string: a chord (`Ctrl+Shift+K`) or a short ordered sequence of chords
//! (`Ctrl+K, Ctrl+D`), with in-place editing (bare Backspace undoes the last
//! chord), commit/focus-advance (bare Enter/Tab), and a manual free-text
//! mode that bypasses interception entirely.
//!
//! # Architecture
//!
//! The engine is a reducer plus an explicit listener lifecycle:
//! - `normalizer` resolves a press to its canonical base label
//! - `chord` assembles modifiers + label into a chord string
//! - `session` is the pure state machine; transitions return [`Effect`]s
//! - `recorder` owns a session and dispatches effects to callbacks
//!
//! Events are processed synchronously in arrival order; nothing here blocks,
//! allocates a thread, or raises an error.

mod chord;
mod keystroke;
mod normalizer;
mod recorder;
mod session;


pub use chord::{build_chord, join_sequence, SEQUENCE_SEPARATOR};
pub use keystroke::{Keystroke, Modifiers};
pub use normalizer::base_label;
pub use recorder::{
    ChordRecorder, ListenerHook, OnChangeCallback, OnRequestNextFieldCallback,
};
pub use session::{
    CaptureMode, CaptureSession, Effect, Effects, SessionState, MAX_SEQUENCE_CHORDS,
};
