/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Editor settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::ingest::TextLimits;
use crate::similarity::DEFAULT_SIMILARITY_THRESHOLD;

/// Editor configuration, stored as `editor.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Undo snapshots kept (default: 50)
    pub history_capacity: usize,

    /// Minimum combined label similarity for auto-connect (default: 0.6)
    pub similarity_threshold: f64,

    /// Lines turned into nodes per text ingest (default: 10)
    pub max_text_nodes: usize,

    /// Label length cap for ingested text (default: 30)
    pub max_label_chars: usize,

    /// OCR words below this confidence are ignored (default: 60)
    pub min_word_confidence: f32,

    /// Canvas size used to place new nodes
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Where Save writes exports; the config directory when unset
    pub export_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_text_nodes: 10,
            max_label_chars: 30,
            min_word_confidence: 60.0,
            canvas_width: 800.0,
            canvas_height: 600.0,
            export_dir: None,
        }
    }
}

impl EditorConfig {
    /// Load settings from the config directory
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        super::load_toml_or_default(path)
    }

    /// Save settings to the config directory
    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        super::save_toml(path, self)
    }

    pub fn text_limits(&self) -> TextLimits {
        TextLimits {
            max_nodes: self.max_text_nodes,
            max_label_chars: self.max_label_chars,
        }
    }

    /// Directory that Save writes into
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| super::config_dir().join("exports"))
    }

    fn config_path() -> PathBuf {
        super::config_dir().join("editor.toml")
    }
}
