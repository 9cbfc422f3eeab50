//! Key-capture input component.
//!
//! `ChordRecorder` is the embeddable front of the capture engine: it owns a
//! [`CaptureSession`], holds the last committed value, and wires the
//! session's effects to caller-supplied callbacks.
//!
//! ## Usage
//! ```rust,ignore
//! let mut recorder = ChordRecorder::new("Ctrl+K")
//!     .on_change(|value| { /* persist */ })
//!     .on_request_next_field(|| { /* move focus */ });
//! recorder.focus();
//! recorder.key_down(&keystroke);
//! recorder.key_up();
//! ```
//!
//! Listener attachment is a scoped resource: the attach/detach hooks fire on
//! session boundaries, and an attached recorder detaches itself on drop so
//! global key interception can never outlive the component.

use tracing::{debug, info};

use super::keystroke::Keystroke;
use super::session::{CaptureMode, CaptureSession, Effect, Effects};

pub type OnChangeCallback = Box<dyn FnMut(&str)>;
pub type OnRequestNextFieldCallback = Box<dyn FnMut()>;
pub type ListenerHook = Box<dyn FnMut()>;

pub struct ChordRecorder {
    value: String,
    session: CaptureSession,
    mode_toggle_enabled: bool,
    listeners_attached: bool,
    on_change: Option<OnChangeCallback>,
    on_request_next_field: Option<OnRequestNextFieldCallback>,
    on_attach_listeners: Option<ListenerHook>,
    on_detach_listeners: Option<ListenerHook>,
}

impl ChordRecorder {
    pub fn new(initial_value: impl Into<String>) -> Self {
        Self {
            value: initial_value.into(),
            session: CaptureSession::new(),
            mode_toggle_enabled: true,
            listeners_attached: false,
            on_change: None,
            on_request_next_field: None,
            on_attach_listeners: None,
            on_detach_listeners: None,
        }
    }

    /// Set the callback invoked on every finalize/edit/commit, and on
    /// manual-mode text edits.
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the callback invoked only on bare Enter/Tab commit.
    pub fn on_request_next_field(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_request_next_field = Some(Box::new(callback));
        self
    }

    /// Hook fired when the session starts intercepting press/release events.
    pub fn on_attach_listeners(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_attach_listeners = Some(Box::new(hook));
        self
    }

    /// Hook fired when the session stops intercepting press/release events.
    pub fn on_detach_listeners(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_detach_listeners = Some(Box::new(hook));
        self
    }

    /// Allow or forbid switching between capture and manual mode.
    pub fn with_mode_toggle_enabled(mut self, enabled: bool) -> Self {
        self.mode_toggle_enabled = enabled;
        self
    }

    /// The last committed shortcut value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn mode(&self) -> CaptureMode {
        self.session.mode()
    }

    pub fn is_capturing(&self) -> bool {
        self.session.is_capturing()
    }

    /// Whether global press/release listeners are currently attached.
    pub fn is_intercepting(&self) -> bool {
        self.listeners_attached
    }

    /// What the field should render: the live session while capturing, the
    /// committed value otherwise.
    pub fn display_value(&self) -> String {
        if self.session.is_capturing() {
            self.session.display()
        } else {
            self.value.clone()
        }
    }

    pub fn focus(&mut self) {
        let effects = self.session.focus();
        self.run(effects);
    }

    pub fn blur(&mut self) {
        let effects = self.session.blur();
        self.run(effects);
    }

    pub fn key_down(&mut self, keystroke: &Keystroke) {
        debug!(
            event_type = "capture_event",
            action = "key_down",
            key = %keystroke.key,
            code = %keystroke.code,
            modifiers = %keystroke.modifiers.summary(),
            "Key down"
        );
        let effects = self.session.key_down(keystroke);
        self.run(effects);
    }

    pub fn key_up(&mut self) {
        let effects = self.session.key_up();
        self.run(effects);
    }

    /// Switch between capture and manual mode. Ignored when the toggle is
    /// disabled for this field.
    pub fn set_mode(&mut self, mode: CaptureMode) {
        if !self.mode_toggle_enabled {
            debug!(
                event_type = "capture_event",
                action = "mode_toggle_ignored",
                "Mode toggle is disabled for this field"
            );
            return;
        }
        let effects = self.session.set_mode(mode);
        self.run(effects);
    }

    /// A free-text edit of the field. Passed through verbatim when the
    /// session is not intercepting keys.
    pub fn text_edited(&mut self, text: &str) {
        if self.session.is_capturing() {
            return;
        }
        self.value = text.to_string();
        if let Some(callback) = self.on_change.as_mut() {
            callback(text);
        }
    }

    fn run(&mut self, effects: Effects) {
        for effect in effects {
            match effect {
                Effect::AttachListeners => {
                    if !self.listeners_attached {
                        self.listeners_attached = true;
                        debug!(
                            event_type = "capture_event",
                            action = "attach_listeners",
                            "Capture session started"
                        );
                        if let Some(hook) = self.on_attach_listeners.as_mut() {
                            hook();
                        }
                    }
                }
                Effect::DetachListeners => self.detach(),
                Effect::Emit(value) => {
                    self.value = value;
                    if let Some(callback) = self.on_change.as_mut() {
                        callback(&self.value);
                    }
                }
                Effect::AdvanceFocus => {
                    info!(
                        event_type = "capture_event",
                        action = "commit",
                        value = %self.value,
                        "Capture committed, advancing focus"
                    );
                    if let Some(callback) = self.on_request_next_field.as_mut() {
                        callback();
                    }
                }
            }
        }
    }

    fn detach(&mut self) {
        if self.listeners_attached {
            self.listeners_attached = false;
            debug!(
                event_type = "capture_event",
                action = "detach_listeners",
                "Capture session ended"
            );
            if let Some(hook) = self.on_detach_listeners.as_mut() {
                hook();
            }
        }
    }
}

impl Drop for ChordRecorder {
    fn drop(&mut self) {
        // Teardown must release key interception even without a blur.
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::keystroke::Modifiers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ctrl_key(key: &str, code: &str) -> Keystroke {
        Keystroke::new(key, code, Modifiers::ctrl())
    }

    fn bare(key: &str, code: &str) -> Keystroke {
        Keystroke::new(key, code, Modifiers::default())
    }

    #[test]
    fn on_change_fires_on_every_finalize() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut recorder =
            ChordRecorder::new("").on_change(move |value| sink.borrow_mut().push(value.to_string()));

        recorder.focus();
        recorder.key_down(&ctrl_key("k", "KeyK"));
        recorder.key_up();
        recorder.key_down(&ctrl_key("d", "KeyD"));
        recorder.key_up();

        assert_eq!(*seen.borrow(), vec!["Ctrl+K", "Ctrl+K, Ctrl+D"]);
    }

    #[test]
    fn next_field_signal_fires_exactly_once_on_commit() {
        let calls = Rc::new(RefCell::new(0u32));
        let counter = calls.clone();
        let mut recorder = ChordRecorder::new("")
            .on_request_next_field(move || *counter.borrow_mut() += 1);

        recorder.focus();
        recorder.key_down(&ctrl_key("k", "KeyK"));
        recorder.key_down(&bare("Tab", "Tab"));

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(recorder.value(), "Ctrl+K");
        assert!(!recorder.is_capturing());
    }

    #[test]
    fn manual_mode_text_edits_pass_through_verbatim() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut recorder =
            ChordRecorder::new("").on_change(move |value| sink.borrow_mut().push(value.to_string()));

        recorder.set_mode(CaptureMode::Manual);
        recorder.focus();
        assert!(!recorder.is_intercepting());

        recorder.text_edited("Ctrl+Shift+[");

        assert_eq!(*seen.borrow(), vec!["Ctrl+Shift+["]);
        assert_eq!(recorder.value(), "Ctrl+Shift+[");
    }

    #[test]
    fn text_edits_are_ignored_while_capturing() {
        let mut recorder = ChordRecorder::new("Ctrl+K");
        recorder.focus();
        recorder.text_edited("typed junk");
        assert_eq!(recorder.value(), "Ctrl+K");
    }

    #[test]
    fn disabled_mode_toggle_is_ignored() {
        let mut recorder = ChordRecorder::new("").with_mode_toggle_enabled(false);
        recorder.set_mode(CaptureMode::Manual);
        assert_eq!(recorder.mode(), CaptureMode::Capture);
    }

    #[test]
    fn abandoned_session_preserves_last_committed_value() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut recorder = ChordRecorder::new("Ctrl+P")
            .on_change(move |value| sink.borrow_mut().push(value.to_string()));

        recorder.focus();
        recorder.key_down(&ctrl_key("k", "KeyK"));
        recorder.blur();

        assert!(seen.borrow().is_empty());
        assert_eq!(recorder.value(), "Ctrl+P");
        assert!(!recorder.is_intercepting());
    }

    #[test]
    fn listener_hooks_pair_up_across_session_boundaries() {
        let attaches = Rc::new(RefCell::new(0u32));
        let detaches = Rc::new(RefCell::new(0u32));
        let a = attaches.clone();
        let d = detaches.clone();
        let mut recorder = ChordRecorder::new("")
            .on_attach_listeners(move || *a.borrow_mut() += 1)
            .on_detach_listeners(move || *d.borrow_mut() += 1);

        recorder.focus();
        recorder.blur();
        recorder.focus();
        recorder.set_mode(CaptureMode::Manual);

        assert_eq!(*attaches.borrow(), 2);
        assert_eq!(*detaches.borrow(), 2);
    }

    #[test]
    fn drop_detaches_listeners() {
        let detaches = Rc::new(RefCell::new(0u32));
        let d = detaches.clone();
        {
            let mut recorder = ChordRecorder::new("")
                .on_detach_listeners(move || *d.borrow_mut() += 1);
            recorder.focus();
        }
        assert_eq!(*detaches.borrow(), 1);
    }

    #[test]
    fn display_value_tracks_session_while_capturing() {
        let mut recorder = ChordRecorder::new("Ctrl+P");
        assert_eq!(recorder.display_value(), "Ctrl+P");

        recorder.focus();
        assert_eq!(recorder.display_value(), "");

        recorder.key_down(&ctrl_key("k", "KeyK"));
        recorder.key_up();
        recorder.key_down(&ctrl_key("d", "KeyD"));
        assert_eq!(recorder.display_value(), "Ctrl+K, Ctrl+D");
    }
}
