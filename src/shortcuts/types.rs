//! Shortcut record types shared by the popup UI and the JSON store.
//!
//! `key_combo` holds the capture engine's canonical string opaquely; nothing
//! here parses it back into structured form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One named shortcut inside a list, with an explicit display order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shortcut {
    pub id: String,
    pub key_combo: String,
    pub description: String,
    pub order: i32,
}

/// A per-application collection of shortcuts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortcutList {
    pub id: String,
    pub name: String,
    pub application_id: String,
    pub shortcuts: Vec<Shortcut>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShortcutList {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        application_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            application_id: application_id.into(),
            shortcuts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the list as modified.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Shortcuts in display order.
    pub fn sorted_shortcuts(&self) -> Vec<&Shortcut> {
        let mut shortcuts: Vec<&Shortcut> = self.shortcuts.iter().collect();
        shortcuts.sort_by_key(|s| s.order);
        shortcuts
    }
}

/// An application shortcuts are grouped under, matched against the
/// foreground process by the popup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub process_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_list_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortcut(id: &str, order: i32) -> Shortcut {
        Shortcut {
            id: id.to_string(),
            key_combo: "Ctrl+K".to_string(),
            description: "test".to_string(),
            order,
        }
    }

    #[test]
    fn sorted_shortcuts_respects_explicit_order() {
        let mut list = ShortcutList::new("l1", "Editing", "app1");
        list.shortcuts = vec![shortcut("b", 2), shortcut("a", 0), shortcut("c", 1)];

        let ids: Vec<&str> = list
            .sorted_shortcuts()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[test]
    fn touch_advances_updated_at() {
        let mut list = ShortcutList::new("l1", "Editing", "app1");
        let created = list.updated_at;
        list.touch();
        assert!(list.updated_at >= created);
    }

    #[test]
    fn application_omits_empty_optionals_in_json() {
        let app = Application {
            id: "app1".to_string(),
            name: "Editor".to_string(),
            process_name: "editor.exe".to_string(),
            icon: None,
            last_used_list_id: None,
        };
        let json = serde_json::to_string(&app).unwrap();
        assert!(!json.contains("icon"));
        assert!(!json.contains("last_used_list_id"));
    }
}
