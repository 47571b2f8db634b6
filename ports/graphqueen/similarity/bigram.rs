/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Character-bigram cosine similarity.

use std::collections::HashMap;

use crate::util::normalize_label;

/// Count every overlapping two-char window
fn bigram_counts(text: &str) -> HashMap<(char, char), u32> {
    let chars: Vec<char> = text.chars().collect();
    let mut counts = HashMap::new();
    for pair in chars.windows(2) {
        *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

fn magnitude(counts: &HashMap<(char, char), u32>) -> f64 {
    counts
        .values()
        .map(|&c| f64::from(c) * f64::from(c))
        .sum::<f64>()
        .sqrt()
}

/// Cosine of the bigram count vectors of two trimmed, lower-cased labels.
///
/// Equal labels score 1. A label shorter than two chars has no bigrams and
/// scores 0 against anything it is not equal to.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let a = normalize_label(a);
    let b = normalize_label(b);
    if a == b {
        return 1.0;
    }

    let counts_a = bigram_counts(&a);
    let counts_b = bigram_counts(&b);
    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    let dot: f64 = counts_a
        .iter()
        .filter_map(|(bigram, &ca)| counts_b.get(bigram).map(|&cb| f64::from(ca) * f64::from(cb)))
        .sum();

    dot / (magnitude(&counts_a) * magnitude(&counts_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_labels_score_one() {
        assert_eq!(cosine_similarity("ab", "ab"), 1.0);
        assert_eq!(cosine_similarity("a", " A "), 1.0);
    }

    #[test]
    fn test_single_chars_score_zero() {
        assert_eq!(cosine_similarity("a", "b"), 0.0);
        assert_eq!(cosine_similarity("a", "abc"), 0.0);
        assert_eq!(cosine_similarity("", "abc"), 0.0);
    }

    #[test]
    fn test_bigram_counts_keep_repeats() {
        let counts = bigram_counts("aaa");
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&('a', 'a')], 2);
    }

    #[test]
    fn test_partial_overlap() {
        // apple: ap pp pl le, aple: ap pl le -> 3 / (2 * sqrt(3))
        let expected = 3.0 / (2.0 * 3f64.sqrt());
        assert!((cosine_similarity("Apple", "Aple") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_bigrams_score_zero() {
        assert_eq!(cosine_similarity("abcd", "wxyz"), 0.0);
    }

    #[test]
    fn test_score_is_symmetric() {
        let forward = cosine_similarity("night", "nacht");
        let backward = cosine_similarity("nacht", "night");
        assert!((forward - backward).abs() < 1e-12);
    }
}
