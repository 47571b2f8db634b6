/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Levenshtein edit distance and the similarity score derived from it.

use crate::util::normalize_label;

/// Classic Levenshtein distance (insert, delete and substitute all cost 1),
/// counted in chars.
///
/// Fills the full `(len_a + 1) x (len_b + 1)` table, so cost is
/// O(len_a * len_b) in both time and memory.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + substitution);
        }
    }

    table[a.len()][b.len()]
}

/// `1 - distance / max(len)` over trimmed, lower-cased labels, in [0, 1].
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let a = normalize_label(a);
    let b = normalize_label(b);
    if a == b {
        return 1.0;
    }

    let longest = a.chars().count().max(b.chars().count());
    let distance = levenshtein_distance(&a, &b);
    1.0 - distance as f64 / longest as f64
}
