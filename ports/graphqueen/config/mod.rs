/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Configuration system for the graph editor.

pub mod editor;
pub mod keybinds;

use std::path::{Path, PathBuf};

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use editor::EditorConfig;
pub use keybinds::{EditorAction, KeybindConfig};

/// Get the config directory for graphqueen
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            PathBuf::from(appdata).join("graphqueen")
        } else {
            PathBuf::from(".graphqueen")
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        if let Some(config_home) = dirs::config_dir() {
            config_home.join("graphqueen")
        } else {
            PathBuf::from(".graphqueen")
        }
    }
}

/// Read a TOML file, falling back to the type's default when the file is
/// missing or does not parse.
pub(crate) fn load_toml_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return T::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring unreadable config {}: {e}", path.display());
            T::default()
        },
    }
}

/// Write a value as pretty TOML, creating the parent directory.
pub(crate) fn save_toml<T: Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml_string = toml::to_string_pretty(value).map_err(std::io::Error::other)?;

    std::fs::write(path, toml_string)
}
