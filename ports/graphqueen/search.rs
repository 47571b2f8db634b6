/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Fuzzy lookup of nodes by label.

use crate::graph::{Graph, NodeKey};
use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher};

#[derive(Clone)]
struct LabelCandidate {
    key: NodeKey,
    label: String,
}

impl AsRef<str> for LabelCandidate {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

/// Return node keys ranked by fuzzy match quality of their label against `query`.
pub fn fuzzy_match_node_keys(graph: &Graph, query: &str) -> Vec<NodeKey> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let normalized_query = query.to_lowercase();
    let pattern = Pattern::parse(
        &normalized_query,
        CaseMatching::Respect,
        Normalization::Never,
    );
    let mut matcher = Matcher::new(Config::DEFAULT);

    let candidates: Vec<LabelCandidate> = graph
        .nodes()
        .map(|(key, node)| LabelCandidate {
            key,
            label: node.label.to_lowercase(),
        })
        .collect();

    pattern
        .match_list(candidates, &mut matcher)
        .into_iter()
        .map(|(candidate, _score)| candidate.key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::default::Point2D;

    #[test]
    fn test_fuzzy_match_tolerates_missing_letters() {
        let mut graph = Graph::new();
        let apple = graph.add_node("Apple".into(), Point2D::new(0.0, 0.0));
        graph.add_node("Zebra".into(), Point2D::new(20.0, 0.0));
        graph.add_node("Banana".into(), Point2D::new(40.0, 0.0));

        let matches = fuzzy_match_node_keys(&graph, "apl");
        assert_eq!(matches.first().copied(), Some(apple));
    }

    #[test]
    fn test_fuzzy_match_ignores_case() {
        let mut graph = Graph::new();
        let notes = graph.add_node("Meeting Notes".into(), Point2D::zero());
        graph.add_node("Shopping list".into(), Point2D::new(20.0, 0.0));

        let matches = fuzzy_match_node_keys(&graph, "MEETING");
        assert_eq!(matches, vec![notes]);
    }

    #[test]
    fn test_fuzzy_match_empty_query_returns_no_matches() {
        let mut graph = Graph::new();
        graph.add_node("anything".into(), Point2D::zero());
        assert!(fuzzy_match_node_keys(&graph, "").is_empty());
        assert!(fuzzy_match_node_keys(&graph, "   ").is_empty());
    }
}
