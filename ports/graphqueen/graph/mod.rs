/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Live graph store for the editor.
//!
//! Core structures:
//! - `Graph`: node/edge container backed by petgraph::StableGraph (undirected)
//! - `Node` / `Edge`: id-keyed value types, see [`types`]
//! - `GraphSnapshot`: deep copy used by the history log and the JSON export

use euclid::default::Point2D;
use petgraph::Undirected;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use std::collections::HashMap;
use uuid::Uuid;

pub mod types;

pub use types::{Edge, GraphSnapshot, Node};

/// Stable node handle (petgraph NodeIndex, survives other deletions)
pub type NodeKey = NodeIndex;

/// Stable edge handle (petgraph EdgeIndex)
pub type EdgeKey = EdgeIndex;

/// Edge weight stored in petgraph
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeWeight {
    /// Combined label similarity when the edge came from auto-connect
    pub similarity: Option<f64>,
}

/// Read-only view of an edge (built from petgraph edge references)
#[derive(Debug, Clone, Copy)]
pub struct EdgeView {
    pub key: EdgeKey,
    pub from: NodeKey,
    pub to: NodeKey,
    pub similarity: Option<f64>,
}

/// Main graph structure backed by petgraph::StableGraph
#[derive(Clone, Debug, Default)]
pub struct Graph {
    inner: StableGraph<Node, EdgeWeight, Undirected>,

    /// Node id to NodeKey mapping for quick lookup
    id_to_node: HashMap<String, NodeKey>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with a freshly generated id
    pub fn add_node(&mut self, label: String, position: Point2D<f32>) -> NodeKey {
        self.insert_node(Uuid::new_v4().to_string(), label, position)
    }

    /// Add a node with a caller-supplied id. Returns None if the id is taken.
    pub fn add_node_with_id(
        &mut self,
        id: String,
        label: String,
        position: Point2D<f32>,
    ) -> Option<NodeKey> {
        if self.id_to_node.contains_key(&id) {
            return None;
        }
        Some(self.insert_node(id, label, position))
    }

    fn insert_node(&mut self, id: String, label: String, position: Point2D<f32>) -> NodeKey {
        let key = self.inner.add_node(Node::new(id.clone(), label, position));
        self.id_to_node.insert(id, key);
        key
    }

    /// Remove a node and all its connected edges
    pub fn remove_node(&mut self, key: NodeKey) -> Option<Node> {
        let node = self.inner.remove_node(key)?;
        self.id_to_node.remove(&node.id);
        Some(node)
    }

    /// Replace a node's label. Returns the old label, or None if the node doesn't exist.
    pub fn rename_node(&mut self, key: NodeKey, label: String) -> Option<String> {
        let node = self.inner.node_weight_mut(key)?;
        Some(std::mem::replace(&mut node.label, label))
    }

    /// Move a node. Returns the old position, or None if the node doesn't exist.
    pub fn move_node(&mut self, key: NodeKey, position: Point2D<f32>) -> Option<Point2D<f32>> {
        let node = self.inner.node_weight_mut(key)?;
        let old = node.position();
        node.x = position.x;
        node.y = position.y;
        Some(old)
    }

    /// Add an edge between two nodes.
    ///
    /// Refuses unknown endpoints, self-edges and pairs that are already
    /// connected in either direction.
    pub fn add_edge(
        &mut self,
        from: NodeKey,
        to: NodeKey,
        similarity: Option<f64>,
    ) -> Option<EdgeKey> {
        if from == to || !self.inner.contains_node(from) || !self.inner.contains_node(to) {
            return None;
        }
        if self.has_edge_between(from, to) {
            return None;
        }
        Some(self.inner.add_edge(from, to, EdgeWeight { similarity }))
    }

    /// Remove the edge joining two nodes, if any
    pub fn remove_edge_between(&mut self, a: NodeKey, b: NodeKey) -> bool {
        match self.inner.find_edge(a, b) {
            Some(edge) => self.inner.remove_edge(edge).is_some(),
            None => false,
        }
    }

    /// Check if an edge joins `a` and `b` (direction is ignored)
    pub fn has_edge_between(&self, a: NodeKey, b: NodeKey) -> bool {
        self.inner.find_edge(a, b).is_some()
    }

    /// Get a node by key
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.inner.node_weight(key)
    }

    /// Get a node and its key by id
    pub fn get_node_by_id(&self, id: &str) -> Option<(NodeKey, &Node)> {
        let &key = self.id_to_node.get(id)?;
        Some((key, self.inner.node_weight(key)?))
    }

    /// Resolve a node id to its key
    pub fn get_node_key_by_id(&self, id: &str) -> Option<NodeKey> {
        self.id_to_node.get(id).copied()
    }

    /// Iterate over all nodes as (key, node) pairs
    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &Node)> {
        self.inner
            .node_indices()
            .map(move |idx| (idx, &self.inner[idx]))
    }

    /// Iterate over all edges as EdgeView
    pub fn edges(&self) -> impl Iterator<Item = EdgeView> + '_ {
        self.inner.edge_references().map(|e| EdgeView {
            key: e.id(),
            from: e.source(),
            to: e.target(),
            similarity: e.weight().similarity,
        })
    }

    /// Iterate neighbor keys for a node
    pub fn neighbors(&self, key: NodeKey) -> impl Iterator<Item = NodeKey> + '_ {
        self.inner.neighbors(key)
    }

    /// Count of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Count of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Copy the graph into id-keyed node and edge lists
    pub fn to_snapshot(&self) -> GraphSnapshot {
        let nodes = self.nodes().map(|(_, node)| node.clone()).collect();

        let edges = self
            .edges()
            .filter_map(|edge| {
                let from = self.get_node(edge.from)?;
                let to = self.get_node(edge.to)?;
                Some(Edge {
                    source_id: from.id.clone(),
                    target_id: to.id.clone(),
                    similarity: edge.similarity,
                })
            })
            .collect();

        GraphSnapshot { nodes, edges }
    }

    /// Rebuild a graph from a snapshot.
    ///
    /// Duplicate node ids keep their first occurrence; edges naming unknown
    /// ids, self-edges and repeated pairs are dropped.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Self {
        let mut graph = Graph::new();

        for node in &snapshot.nodes {
            graph.add_node_with_id(node.id.clone(), node.label.clone(), node.position());
        }

        for edge in &snapshot.edges {
            let from = graph.get_node_key_by_id(&edge.source_id);
            let to = graph.get_node_key_by_id(&edge.target_id);
            if let (Some(from), Some(to)) = (from, to) {
                graph.add_edge(from, to, edge.similarity);
            }
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_new() {
        let graph = Graph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_node() {
        let mut graph = Graph::new();
        let key = graph.add_node("Apple".to_string(), Point2D::new(100.0, 200.0));

        let node = graph.get_node(key).unwrap();
        assert_eq!(node.label, "Apple");
        assert_eq!(node.x, 100.0);
        assert_eq!(node.y, 200.0);
        assert!(Uuid::parse_str(&node.id).is_ok());
    }

    #[test]
    fn test_add_node_with_duplicate_id_is_refused() {
        let mut graph = Graph::new();
        assert!(graph
            .add_node_with_id("1".into(), "a".into(), Point2D::zero())
            .is_some());
        assert!(graph
            .add_node_with_id("1".into(), "b".into(), Point2D::zero())
            .is_none());
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.get_node_by_id("1").unwrap().1.label, "a");
    }

    #[test]
    fn test_add_edge_is_undirected() {
        let mut graph = Graph::new();
        let a = graph.add_node("a".into(), Point2D::zero());
        let b = graph.add_node("b".into(), Point2D::new(1.0, 1.0));

        graph.add_edge(a, b, None).unwrap();

        assert!(graph.has_edge_between(a, b));
        assert!(graph.has_edge_between(b, a));
        assert!(graph.add_edge(b, a, None).is_none());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(a).count(), 1);
    }

    #[test]
    fn test_add_edge_rejects_self_and_unknown_nodes() {
        let mut graph = Graph::new();
        let a = graph.add_node("a".into(), Point2D::zero());
        let invalid = NodeIndex::new(999);

        assert!(graph.add_edge(a, a, None).is_none());
        assert!(graph.add_edge(invalid, a, None).is_none());
        assert!(graph.add_edge(a, invalid, None).is_none());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_node_drops_edges() {
        let mut graph = Graph::new();
        let a = graph.add_node("a".into(), Point2D::zero());
        let b = graph.add_node("b".into(), Point2D::new(1.0, 1.0));
        graph.add_edge(a, b, Some(0.9));
        let a_id = graph.get_node(a).unwrap().id.clone();

        let removed = graph.remove_node(a).unwrap();
        assert_eq!(removed.label, "a");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.get_node_by_id(&a_id).is_none());
        assert!(graph.get_node(b).is_some());
        assert!(graph.remove_node(a).is_none());
    }

    #[test]
    fn test_remove_edge_between() {
        let mut graph = Graph::new();
        let a = graph.add_node("a".into(), Point2D::zero());
        let b = graph.add_node("b".into(), Point2D::zero());
        graph.add_edge(a, b, None);

        assert!(graph.remove_edge_between(b, a));
        assert!(!graph.remove_edge_between(a, b));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_rename_and_move_node() {
        let mut graph = Graph::new();
        let key = graph.add_node("old".into(), Point2D::new(1.0, 2.0));

        assert_eq!(graph.rename_node(key, "new".into()), Some("old".to_string()));
        assert_eq!(
            graph.move_node(key, Point2D::new(5.0, 6.0)),
            Some(Point2D::new(1.0, 2.0))
        );

        let node = graph.get_node(key).unwrap();
        assert_eq!(node.label, "new");
        assert_eq!(node.position(), Point2D::new(5.0, 6.0));
        assert!(graph.rename_node(NodeIndex::new(42), "x".into()).is_none());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut graph = Graph::new();
        let a = graph.add_node("Site A".into(), Point2D::new(10.0, 20.0));
        let b = graph.add_node("Site B".into(), Point2D::new(30.0, 40.0));
        graph.add_edge(a, b, Some(0.8));

        let snapshot = graph.to_snapshot();
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.edges.len(), 1);
        assert_eq!(snapshot.edges[0].similarity, Some(0.8));

        let restored = Graph::from_snapshot(&snapshot);
        assert_eq!(restored.node_count(), 2);
        assert_eq!(restored.edge_count(), 1);
        assert_eq!(restored.to_snapshot(), snapshot);

        let (_, ra) = restored.get_node_by_id(&snapshot.nodes[0].id).unwrap();
        assert_eq!(ra.label, "Site A");
        assert_eq!(ra.x, 10.0);
    }

    #[test]
    fn test_from_snapshot_drops_dangling_and_duplicate_edges() {
        let snapshot = GraphSnapshot {
            nodes: vec![
                Node::new("1", "a", Point2D::zero()),
                Node::new("2", "b", Point2D::zero()),
            ],
            edges: vec![
                Edge::new("1", "2"),
                Edge::new("2", "1"),
                Edge::new("1", "missing"),
                Edge::new("1", "1"),
            ],
        };

        let graph = Graph::from_snapshot(&snapshot);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_snapshot_empty_graph() {
        let graph = Graph::new();
        let restored = Graph::from_snapshot(&graph.to_snapshot());
        assert_eq!(restored.node_count(), 0);
        assert_eq!(restored.edge_count(), 0);
    }
}
