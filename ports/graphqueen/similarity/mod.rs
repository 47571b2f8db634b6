/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Label similarity scoring and auto-connect edge proposals.
//!
//! The combined score of two labels is the mean of:
//! - normalized Levenshtein similarity ([`edit_similarity`])
//! - character-bigram cosine similarity ([`cosine_similarity`])
//!
//! Pair search is O(n^2) in node count with an O(L1 * L2) edit distance per
//! pair. Graphs here hold tens to low hundreds of nodes, which keeps that
//! affordable.

mod bigram;
mod edit;

use std::collections::HashSet;

use log::debug;

pub use bigram::cosine_similarity;
pub use edit::{edit_similarity, levenshtein_distance};

use crate::graph::types::undirected_key;
use crate::graph::{Edge, Node};

/// Threshold used when the caller has no preference
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Mean of the edit-distance and bigram-cosine scores, in [0, 1]
pub fn combined_similarity(a: &str, b: &str) -> f64 {
    (edit_similarity(a, b) + cosine_similarity(a, b)) / 2.0
}

/// Result of one auto-connect pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityReport {
    /// Proposed edges, in pair iteration order
    pub candidates: Vec<Edge>,

    /// Pairs that were scored (already-connected pairs are skipped, not scored)
    pub pairs_evaluated: usize,
}

/// Propose an edge for every unconnected node pair scoring at least `threshold`.
///
/// Pairs are visited as `(i, j)` with `i < j` in input order and the proposal
/// runs from `nodes[i]` to `nodes[j]`. Neither input is modified.
pub fn find_similar_pairs(
    nodes: &[Node],
    existing_edges: &[Edge],
    threshold: f64,
) -> Result<SimilarityReport, SimilarityError> {
    if nodes.len() < 2 {
        return Err(SimilarityError::InsufficientNodes(nodes.len()));
    }
    if !(0.0..=1.0).contains(&threshold) {
        return Err(SimilarityError::ThresholdOutOfRange(threshold));
    }

    let connected: HashSet<(&str, &str)> = existing_edges.iter().map(Edge::undirected_key).collect();

    let mut report = SimilarityReport::default();
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            if a.id == b.id || connected.contains(&undirected_key(&a.id, &b.id)) {
                continue;
            }

            let score = combined_similarity(&a.label, &b.label);
            report.pairs_evaluated += 1;
            if score >= threshold {
                debug!("Similar: {:?} ~ {:?} ({score:.3})", a.label, b.label);
                report
                    .candidates
                    .push(Edge::new(a.id.clone(), b.id.clone()).with_similarity(score));
            }
        }
    }

    Ok(report)
}

/// Errors from the similarity engine
#[derive(Debug, Clone, PartialEq)]
pub enum SimilarityError {
    /// Auto-connect needs at least two nodes; carries the count supplied
    InsufficientNodes(usize),
    /// Threshold was outside [0, 1] or NaN
    ThresholdOutOfRange(f64),
}

impl std::fmt::Display for SimilarityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimilarityError::InsufficientNodes(count) => {
                write!(f, "Need at least 2 nodes to auto-connect (have {count})")
            },
            SimilarityError::ThresholdOutOfRange(t) => {
                write!(f, "Similarity threshold must be within [0, 1], got {t}")
            },
        }
    }
}

impl std::error::Error for SimilarityError {}
