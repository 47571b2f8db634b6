/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Graph editing core: a bounded undo/redo history of graph snapshots and a
//! label-similarity engine that proposes edges between similar nodes.
//!
//! Rendering, OCR and file pickers live in the host; they drive a
//! [`GraphEditor`] and re-render from [`GraphEditor::graph`].

pub mod app;
pub mod config;
pub mod graph;
pub mod history;
pub mod ingest;
pub mod persistence;
pub mod search;
pub mod similarity;
mod util;

pub use app::{ActionOutcome, AutoConnectSummary, EditorError, GraphEditor};
pub use graph::{Edge, Graph, GraphSnapshot, Node, NodeKey};
pub use history::History;
pub use similarity::{SimilarityError, SimilarityReport, find_similar_pairs};
