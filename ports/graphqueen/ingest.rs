/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Turning pasted or recognised text into positioned node labels.
//!
//! The OCR engine is external; it hands over [`OcrWord`]s and this module
//! only maps them onto the canvas.

use euclid::default::{Box2D, Point2D};

use crate::util::clip_label;

/// Grid layout for text lines: three columns, offsets in canvas pixels.
const GRID_COLUMNS: usize = 3;
const GRID_ORIGIN: f32 = 100.0;
const GRID_COLUMN_SPACING: f32 = 150.0;
const GRID_ROW_SPACING: f32 = 100.0;

/// Limits applied when splitting text into nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLimits {
    pub max_nodes: usize,
    pub max_label_chars: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            max_nodes: 10,
            max_label_chars: 30,
        }
    }
}

/// A label with the canvas position it should be placed at
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub label: String,
    pub position: Point2D<f32>,
}

/// One recognised word with its bounding box in image pixels
#[derive(Debug, Clone, PartialEq)]
pub struct OcrWord {
    pub text: String,
    pub bbox: Box2D<f32>,
    /// Engine confidence, 0-100
    pub confidence: f32,
}

/// Position of the `index`-th text node on the three-column grid.
pub fn grid_position(index: usize) -> Point2D<f32> {
    let column = (index % GRID_COLUMNS) as f32;
    let row = (index / GRID_COLUMNS) as f32;
    Point2D::new(
        GRID_ORIGIN + column * GRID_COLUMN_SPACING,
        GRID_ORIGIN + row * GRID_ROW_SPACING,
    )
}

/// One label per non-blank line, clipped and laid out on the grid.
pub fn nodes_from_text(text: &str, limits: TextLimits) -> Vec<PlacedLabel> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(limits.max_nodes)
        .enumerate()
        .map(|(i, line)| PlacedLabel {
            label: clip_label(line, limits.max_label_chars),
            position: grid_position(i),
        })
        .collect()
}

/// One label per confident word, placed at the center of its box.
///
/// `scale` maps image pixels onto the canvas (canvas width / image width).
pub fn nodes_from_words(words: &[OcrWord], min_confidence: f32, scale: f32) -> Vec<PlacedLabel> {
    words
        .iter()
        .filter(|word| word.confidence >= min_confidence)
        .filter_map(|word| {
            let label = word.text.trim();
            if label.is_empty() {
                return None;
            }
            Some(PlacedLabel {
                label: label.to_string(),
                position: word.bbox.center() * scale,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, min: (f32, f32), max: (f32, f32), confidence: f32) -> OcrWord {
        OcrWord {
            text: text.to_string(),
            bbox: Box2D::new(Point2D::new(min.0, min.1), Point2D::new(max.0, max.1)),
            confidence,
        }
    }

    #[test]
    fn test_grid_layout() {
        assert_eq!(grid_position(0), Point2D::new(100.0, 100.0));
        assert_eq!(grid_position(2), Point2D::new(400.0, 100.0));
        assert_eq!(grid_position(3), Point2D::new(100.0, 200.0));
        assert_eq!(grid_position(7), Point2D::new(250.0, 300.0));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let placed = nodes_from_text("Node 1\n\n   \nNode 2\r\n  Node 3  ", TextLimits::default());
        let labels: Vec<_> = placed.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Node 1", "Node 2", "Node 3"]);
        assert_eq!(placed[1].position, grid_position(1));
    }

    #[test]
    fn test_node_limit_and_clipping() {
        let text: String = (0..15).map(|i| format!("{i} {}\n", "x".repeat(40))).collect();
        let placed = nodes_from_text(&text, TextLimits::default());

        assert_eq!(placed.len(), 10);
        assert!(placed.iter().all(|p| p.label.chars().count() == 30));
        assert!(placed[9].label.starts_with("9 "));
    }

    #[test]
    fn test_empty_text() {
        assert!(nodes_from_text("", TextLimits::default()).is_empty());
        assert!(nodes_from_text("\n \n", TextLimits::default()).is_empty());
    }

    #[test]
    fn test_words_placed_at_box_center() {
        let words = vec![
            word("Hello", (10.0, 20.0), (50.0, 40.0), 95.0),
            word("world", (60.0, 20.0), (100.0, 40.0), 88.0),
        ];

        let placed = nodes_from_words(&words, 60.0, 0.5);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].label, "Hello");
        assert_eq!(placed[0].position, Point2D::new(15.0, 15.0));
        assert_eq!(placed[1].position, Point2D::new(40.0, 15.0));
    }

    #[test]
    fn test_low_confidence_and_blank_words_skipped() {
        let words = vec![
            word("noise", (0.0, 0.0), (10.0, 10.0), 12.0),
            word("  ", (0.0, 0.0), (10.0, 10.0), 99.0),
            word(" kept ", (0.0, 0.0), (10.0, 10.0), 60.0),
        ];

        let placed = nodes_from_words(&words, 60.0, 1.0);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].label, "kept");
    }
}
