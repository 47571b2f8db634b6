/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Editor session state: the live graph plus its undo history.

use std::path::PathBuf;

use euclid::default::Point2D;
use log::{debug, info, warn};
use rand::Rng;
use time::OffsetDateTime;

use crate::config::{EditorAction, EditorConfig};
use crate::graph::{Graph, GraphSnapshot, NodeKey};
use crate::history::History;
use crate::ingest::{self, OcrWord, PlacedLabel};
use crate::persistence::types::GraphExport;
use crate::persistence::{self, ExportError};
use crate::search;
use crate::similarity::{self, SimilarityError};

/// Keeps random placement away from the canvas edges
const PLACEMENT_MARGIN: f32 = 50.0;

/// Outcome of an auto-connect pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConnectSummary {
    pub pairs_evaluated: usize,
    pub edges_added: usize,
}

/// What a keyboard action did
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Undo/redo ran; false when there was nothing to step to
    HistoryStep(bool),
    Saved(PathBuf),
    AutoConnected(AutoConnectSummary),
}

/// Main editor state
pub struct GraphEditor {
    /// The live graph
    graph: Graph,

    /// Snapshot log backing undo/redo
    history: History,

    pub config: EditorConfig,
}

impl GraphEditor {
    /// Create an editor whose history starts at the empty graph
    pub fn new(config: EditorConfig) -> Self {
        let mut editor = Self {
            graph: Graph::new(),
            history: History::with_capacity(config.history_capacity),
            config,
        };
        editor.save_state();
        editor
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Push the live graph onto the history log
    fn save_state(&mut self) {
        let snapshot = self.graph.to_snapshot();
        self.history.push(&snapshot.nodes, &snapshot.edges);
        info!("State saved ({})", self.history_position());
    }

    /// `cursor/len`, one-based, for log lines
    fn history_position(&self) -> String {
        let cursor = self.history.cursor().map_or(0, |c| c + 1);
        format!("{cursor}/{}", self.history.len())
    }

    fn install(&mut self, snapshot: &GraphSnapshot) {
        self.graph = Graph::from_snapshot(snapshot);
    }

    /// Add a node at a random position inside the canvas margins
    pub fn add_node(&mut self, label: &str) -> Option<NodeKey> {
        let mut rng = rand::thread_rng();
        let max_x = (self.config.canvas_width - PLACEMENT_MARGIN).max(PLACEMENT_MARGIN);
        let max_y = (self.config.canvas_height - PLACEMENT_MARGIN).max(PLACEMENT_MARGIN);
        let position = Point2D::new(
            rng.gen_range(PLACEMENT_MARGIN..=max_x),
            rng.gen_range(PLACEMENT_MARGIN..=max_y),
        );
        self.add_node_at(label, position)
    }

    /// Add a node at `position`. Blank labels are refused.
    pub fn add_node_at(&mut self, label: &str, position: Point2D<f32>) -> Option<NodeKey> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        let key = self.graph.add_node(label.to_string(), position);
        info!("Added node: {label}");
        self.save_state();
        Some(key)
    }

    /// One node per non-blank line of `text`; a single history step.
    pub fn add_nodes_from_text(&mut self, text: &str) -> Vec<NodeKey> {
        let placed = ingest::nodes_from_text(text, self.config.text_limits());
        let keys = self.add_placed(placed);
        info!("Added {} nodes from text", keys.len());
        keys
    }

    /// One node per confident OCR word; a single history step.
    pub fn add_nodes_from_words(&mut self, words: &[OcrWord], scale: f32) -> Vec<NodeKey> {
        let placed = ingest::nodes_from_words(words, self.config.min_word_confidence, scale);
        let keys = self.add_placed(placed);
        info!("Added {} nodes from {} OCR words", keys.len(), words.len());
        keys
    }

    fn add_placed(&mut self, placed: Vec<PlacedLabel>) -> Vec<NodeKey> {
        let keys: Vec<NodeKey> = placed
            .into_iter()
            .map(|p| self.graph.add_node(p.label, p.position))
            .collect();
        if !keys.is_empty() {
            self.save_state();
        }
        keys
    }

    /// Connect two nodes by id. False for unknown ids, self-edges and existing pairs.
    pub fn connect(&mut self, a: &str, b: &str) -> bool {
        let (Some(from), Some(to)) = (
            self.graph.get_node_key_by_id(a),
            self.graph.get_node_key_by_id(b),
        ) else {
            return false;
        };
        if self.graph.add_edge(from, to, None).is_none() {
            debug!("Not connecting {a} and {b}");
            return false;
        }
        info!("Connected {a} - {b}");
        self.save_state();
        true
    }

    /// Delete a node and its edges
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(key) = self.graph.get_node_key_by_id(id) else {
            return false;
        };
        if self.graph.remove_node(key).is_none() {
            return false;
        }
        info!("Deleted node {id}");
        self.save_state();
        true
    }

    /// Edit a node's label. Blank labels are refused.
    pub fn rename_node(&mut self, id: &str, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        let Some(key) = self.graph.get_node_key_by_id(id) else {
            return false;
        };
        match self.graph.rename_node(key, label.to_string()) {
            Some(old) if old != label => {
                info!("Renamed {old:?} to {label:?}");
                self.save_state();
                true
            },
            _ => false,
        }
    }

    /// Move a node, e.g. at the end of a drag
    pub fn move_node(&mut self, id: &str, position: Point2D<f32>) -> bool {
        let Some(key) = self.graph.get_node_key_by_id(id) else {
            return false;
        };
        match self.graph.move_node(key, position) {
            Some(old) if old != position => {
                self.save_state();
                true
            },
            _ => false,
        }
    }

    /// Connect every unconnected pair whose labels score at least `threshold`.
    pub fn auto_connect(&mut self, threshold: f64) -> Result<AutoConnectSummary, SimilarityError> {
        let snapshot = self.graph.to_snapshot();
        let report = similarity::find_similar_pairs(&snapshot.nodes, &snapshot.edges, threshold)?;

        let mut edges_added = 0;
        for edge in &report.candidates {
            let from = self.graph.get_node_key_by_id(&edge.source_id);
            let to = self.graph.get_node_key_by_id(&edge.target_id);
            if let (Some(from), Some(to)) = (from, to)
                && self.graph.add_edge(from, to, edge.similarity).is_some()
            {
                edges_added += 1;
            }
        }

        info!(
            "Auto-connect: {edges_added} edges from {} pairs (threshold {threshold})",
            report.pairs_evaluated
        );
        if edges_added > 0 {
            self.save_state();
        }

        Ok(AutoConnectSummary {
            pairs_evaluated: report.pairs_evaluated,
            edges_added,
        })
    }

    /// Step back one snapshot. False when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.install(&snapshot);
                info!("Undo ({})", self.history_position());
                true
            },
            None => {
                info!("Nothing to undo");
                false
            },
        }
    }

    /// Step forward one snapshot. False when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.install(&snapshot);
                info!("Redo ({})", self.history_position());
                true
            },
            None => {
                info!("Nothing to redo");
                false
            },
        }
    }

    /// Export the live graph stamped with the current time
    pub fn export(&self) -> GraphExport {
        persistence::export_snapshot(self.graph.to_snapshot(), OffsetDateTime::now_utc())
    }

    /// Replace the live graph with an imported one; a single history step.
    pub fn import(&mut self, export: GraphExport) {
        let snapshot = export.into_snapshot();
        let expected = snapshot.nodes.len();
        self.install(&snapshot);
        if self.graph.node_count() != expected {
            warn!(
                "Import kept {} of {expected} nodes (duplicate ids dropped)",
                self.graph.node_count()
            );
        }
        info!(
            "Imported {} nodes, {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.save_state();
    }

    /// Write an export into the configured export directory
    pub fn save(&self) -> Result<PathBuf, ExportError> {
        let now = OffsetDateTime::now_utc();
        let export = persistence::export_snapshot(self.graph.to_snapshot(), now);
        persistence::save_export(&self.config.resolved_export_dir(), &export, now)
    }

    /// Node keys ranked by fuzzy label match
    pub fn search(&self, query: &str) -> Vec<NodeKey> {
        search::fuzzy_match_node_keys(&self.graph, query)
    }

    /// Run a keyboard-bound action
    pub fn perform(&mut self, action: EditorAction) -> Result<ActionOutcome, EditorError> {
        Ok(match action {
            EditorAction::Undo => ActionOutcome::HistoryStep(self.undo()),
            EditorAction::Redo => ActionOutcome::HistoryStep(self.redo()),
            EditorAction::Save => ActionOutcome::Saved(self.save()?),
            EditorAction::AutoConnect => {
                let threshold = self.config.similarity_threshold;
                ActionOutcome::AutoConnected(self.auto_connect(threshold)?)
            },
        })
    }
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

/// Errors surfaced by editor actions
#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    Similarity(SimilarityError),
    Export(ExportError),
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorError::Similarity(e) => write!(f, "{e}"),
            EditorError::Export(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::Similarity(e) => Some(e),
            EditorError::Export(e) => Some(e),
        }
    }
}

impl From<SimilarityError> for EditorError {
    fn from(e: SimilarityError) -> Self {
        EditorError::Similarity(e)
    }
}

impl From<ExportError> for EditorError {
    fn from(e: ExportError) -> Self {
        EditorError::Export(e)
    }
}
