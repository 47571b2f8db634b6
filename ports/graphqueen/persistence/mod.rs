/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! JSON export and import of whole graphs.
//!
//! Files are pretty-printed `{ nodes, edges, metadata }` documents named
//! `graph_<timestamp>.json` when saved into a directory.

pub mod types;

use std::path::{Path, PathBuf};

use log::{info, warn};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use types::GraphExport;

use crate::graph::GraphSnapshot;

/// Build an export of `snapshot` stamped with `now`.
pub fn export_snapshot(snapshot: GraphSnapshot, now: OffsetDateTime) -> GraphExport {
    let created = match now.format(&Rfc3339) {
        Ok(created) => created,
        Err(e) => {
            warn!("Export timestamp left empty: {e}");
            String::new()
        },
    };
    GraphExport::from_snapshot(snapshot, created)
}

/// `graph_YYYY-MM-DDTHH-MM-SS.json`
pub fn export_filename(now: OffsetDateTime) -> String {
    let stamp = now
        .format(format_description!(
            "[year]-[month]-[day]T[hour]-[minute]-[second]"
        ))
        .unwrap_or_default();
    format!("graph_{stamp}.json")
}

pub fn to_json(export: &GraphExport) -> Result<String, ExportError> {
    serde_json::to_string_pretty(export).map_err(|e| ExportError::Json(format!("{e}")))
}

pub fn from_json(json: &str) -> Result<GraphExport, ExportError> {
    serde_json::from_str(json).map_err(|e| ExportError::Json(format!("{e}")))
}

/// Write an export to an explicit path, creating parent directories.
pub fn write_export(path: &Path, export: &GraphExport) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| ExportError::Io(format!("Failed to create dir: {e}")))?;
    }
    let json = to_json(export)?;
    std::fs::write(path, json)
        .map_err(|e| ExportError::Io(format!("Failed to write {}: {e}", path.display())))?;
    info!("Graph saved as {}", path.display());
    Ok(())
}

pub fn read_export(path: &Path) -> Result<GraphExport, ExportError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| ExportError::Io(format!("Failed to read {}: {e}", path.display())))?;
    from_json(&json)
}

/// Save into `dir` under a timestamped file name and return the full path.
pub fn save_export(
    dir: &Path,
    export: &GraphExport,
    now: OffsetDateTime,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_filename(now));
    write_export(&path, export)?;
    Ok(path)
}

/// Errors from reading or writing exports
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    Io(String),
    Json(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "IO error: {e}"),
            ExportError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}
