/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Keybind configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Editor commands reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Undo,
    Redo,
    Save,
    AutoConnect,
}

/// Keybind configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    /// Undo last change (default: Ctrl+Z)
    pub undo: String,

    /// Redo (default: Ctrl+Shift+Z)
    pub redo: String,

    /// Export graph as JSON (default: Ctrl+S)
    pub save: String,

    /// Connect similar labels (default: Ctrl+Shift+A)
    pub auto_connect: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            undo: "Ctrl+Z".to_string(),
            redo: "Ctrl+Shift+Z".to_string(),
            save: "Ctrl+S".to_string(),
            auto_connect: "Ctrl+Shift+A".to_string(),
        }
    }
}

impl KeybindConfig {
    /// Load keybinds from config file
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        super::load_toml_or_default(path)
    }

    /// Save keybinds to config file
    pub fn save(&self) -> std::io::Result<()> {
        super::save_toml(&Self::config_path(), self)
    }

    /// Resolve a pressed chord such as `"ctrl+shift+z"` to its action.
    pub fn action_for(&self, chord: &str) -> Option<EditorAction> {
        let pressed = canonical_chord(chord);
        [
            (&self.undo, EditorAction::Undo),
            (&self.redo, EditorAction::Redo),
            (&self.save, EditorAction::Save),
            (&self.auto_connect, EditorAction::AutoConnect),
        ]
        .into_iter()
        .find(|(binding, _)| canonical_chord(binding) == pressed)
        .map(|(_, action)| action)
    }

    /// Get the path to the keybinds config file
    fn config_path() -> PathBuf {
        super::config_dir().join("keybinds.toml")
    }
}

/// Lower-case, treat Cmd/Meta as Ctrl, and sort modifiers so that
/// `Shift+Ctrl+Z` and `ctrl+shift+z` compare equal.
fn canonical_chord(chord: &str) -> Vec<String> {
    let mut parts: Vec<String> = chord
        .split('+')
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .map(|part| match part.as_str() {
            "cmd" | "meta" | "super" | "control" => "ctrl".to_string(),
            _ => part,
        })
        .collect();
    let key = parts.pop();
    parts.sort();
    parts.dedup();
    parts.extend(key);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_bindings_resolve() {
        let keybinds = KeybindConfig::default();
        assert_eq!(keybinds.action_for("Ctrl+Z"), Some(EditorAction::Undo));
        assert_eq!(keybinds.action_for("Ctrl+Shift+Z"), Some(EditorAction::Redo));
        assert_eq!(keybinds.action_for("Ctrl+S"), Some(EditorAction::Save));
        assert_eq!(
            keybinds.action_for("Ctrl+Shift+A"),
            Some(EditorAction::AutoConnect)
        );
    }

    #[test]
    fn test_chords_ignore_case_order_and_meta() {
        let keybinds = KeybindConfig::default();
        assert_eq!(keybinds.action_for("ctrl+z"), Some(EditorAction::Undo));
        assert_eq!(keybinds.action_for("Shift+Cmd+Z"), Some(EditorAction::Redo));
        assert_eq!(keybinds.action_for("Meta + S"), Some(EditorAction::Save));
    }

    #[test]
    fn test_unbound_chord() {
        let keybinds = KeybindConfig::default();
        assert_eq!(keybinds.action_for("Z"), None);
        assert_eq!(keybinds.action_for("Ctrl+Alt+Z"), None);
        assert_eq!(keybinds.action_for(""), None);
    }

    #[test]
    fn test_custom_binding_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keybinds.toml");
        std::fs::write(&path, "redo = \"Ctrl+Y\"\n").unwrap();

        let keybinds = KeybindConfig::load_from(&path);
        assert_eq!(keybinds.action_for("Ctrl+Y"), Some(EditorAction::Redo));
        assert_eq!(keybinds.action_for("Ctrl+Shift+Z"), None);
        assert_eq!(keybinds.undo, "Ctrl+Z");
    }
}
