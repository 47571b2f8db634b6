/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Plain value types shared by the history log, the similarity engine and
//! the JSON export.
//!
//! These carry string ids as identity, so they stay valid across graph
//! rebuilds (petgraph indices do not).

use euclid::default::Point2D;
use serde::{Deserialize, Deserializer, Serialize};

/// A labelled node at a canvas position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,

    #[serde(default)]
    pub x: f32,

    #[serde(default)]
    pub y: f32,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, position: Point2D<f32>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x: position.x,
            y: position.y,
        }
    }

    pub fn position(&self) -> Point2D<f32> {
        Point2D::new(self.x, self.y)
    }
}

/// An undirected connection between two node ids.
///
/// `similarity` is set for edges proposed by auto-connect and absent for
/// edges drawn by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(rename = "source")]
    pub source_id: String,

    #[serde(rename = "target")]
    pub target_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl Edge {
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            similarity: None,
        }
    }

    pub fn with_similarity(mut self, similarity: f64) -> Self {
        self.similarity = Some(similarity);
        self
    }

    /// True if this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source_id == a && self.target_id == b) || (self.source_id == b && self.target_id == a)
    }

    /// Endpoint pair in a direction-independent order, usable as a set key.
    pub fn undirected_key(&self) -> (&str, &str) {
        undirected_key(&self.source_id, &self.target_id)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn undirected_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Full copy of graph state at one instant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    pub fn new(nodes: &[Node], edges: &[Edge]) -> Self {
        Self {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
        }
    }
}
