//! JSON persistence for shortcut lists and applications.
//!
//! Records live under the data directory (`~/.chordkit/`) as
//! `lists.json` and `applications.json`. Missing files load as empty
//! collections; saves create parent directories and write pretty JSON so the
//! files stay hand-editable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use super::types::{Application, ShortcutList};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed store for shortcut data.
pub struct ShortcutStore {
    dir: PathBuf,
}

impl ShortcutStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the default data directory (`~/.chordkit/`).
    pub fn open_default() -> Self {
        Self::new(default_data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn lists_path(&self) -> PathBuf {
        self.dir.join("lists.json")
    }

    fn applications_path(&self) -> PathBuf {
        self.dir.join("applications.json")
    }

    pub fn load_lists(&self) -> Result<Vec<ShortcutList>, StoreError> {
        load_collection(&self.lists_path())
    }

    pub fn save_lists(&self, lists: &[ShortcutList]) -> Result<(), StoreError> {
        save_collection(&self.lists_path(), lists)
    }

    /// Insert the list, or replace an existing list with the same id.
    pub fn upsert_list(&self, list: ShortcutList) -> Result<(), StoreError> {
        let mut lists = self.load_lists()?;
        if let Some(index) = lists.iter().position(|l| l.id == list.id) {
            lists[index] = list;
        } else {
            lists.push(list);
        }
        self.save_lists(&lists)
    }

    pub fn delete_list(&self, list_id: &str) -> Result<(), StoreError> {
        let mut lists = self.load_lists()?;
        lists.retain(|l| l.id != list_id);
        info!(
            event_type = "store_event",
            action = "delete_list",
            list_id = list_id,
            "Shortcut list deleted"
        );
        self.save_lists(&lists)
    }

    pub fn load_applications(&self) -> Result<Vec<Application>, StoreError> {
        load_collection(&self.applications_path())
    }

    pub fn save_applications(&self, apps: &[Application]) -> Result<(), StoreError> {
        save_collection(&self.applications_path(), apps)
    }

    /// Insert the application, or replace an existing one with the same id.
    pub fn upsert_application(&self, app: Application) -> Result<(), StoreError> {
        let mut apps = self.load_applications()?;
        if let Some(index) = apps.iter().position(|a| a.id == app.id) {
            apps[index] = app;
        } else {
            apps.push(app);
        }
        self.save_applications(&apps)
    }
}

/// Default data directory, `~/.chordkit/`.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".chordkit"))
        .unwrap_or_else(|| std::env::temp_dir().join("chordkit"))
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn save_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(items)?;
    fs::write(path, content)?;
    Ok(())
}
