//! Shortcut records and their JSON store.
//!
//! The capture engine emits an opaque shortcut string; these types carry it
//! through the rest of the application as part of a record with a
//! description and an explicit display order, grouped into per-application
//! lists.

mod store;
mod types;

pub use store::{default_data_dir, ShortcutStore, StoreError};
pub use types::{Application, Shortcut, ShortcutList};
