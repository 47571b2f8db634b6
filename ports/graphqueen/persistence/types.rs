/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Serializable types for the JSON graph export.
//!
//! Nodes and edges reuse the id-keyed graph value types, so a snapshot
//! round-trips through an export unchanged.

use serde::{Deserialize, Serialize};

use crate::graph::{Edge, GraphSnapshot, Node};

/// Export header
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    /// RFC 3339 creation time
    pub created: String,
    pub node_count: usize,
    pub edge_count: usize,
}

/// Full exported document: `{ nodes, edges, metadata }`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GraphExport {
    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub edges: Vec<Edge>,

    pub metadata: Option<ExportMetadata>,
}

impl GraphExport {
    pub fn from_snapshot(snapshot: GraphSnapshot, created: String) -> Self {
        let metadata = ExportMetadata {
            created,
            node_count: snapshot.nodes.len(),
            edge_count: snapshot.edges.len(),
        };
        Self {
            nodes: snapshot.nodes,
            edges: snapshot.edges,
            metadata: Some(metadata),
        }
    }

    pub fn into_snapshot(self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
