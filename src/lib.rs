//! ChordKit - per-application keyboard shortcut popup.
//!
//! The core of this crate is the [`capture`] engine: it turns raw keyboard
//! press/release events into canonical shortcut strings like
//! `Ctrl+K, Ctrl+D`. The surrounding modules carry those strings through the
//! rest of the application: [`shortcuts`] groups them into per-application
//! lists persisted as JSON, and [`config`] holds user settings.

pub mod capture;
pub mod config;
pub mod logging;
pub mod shortcuts;
