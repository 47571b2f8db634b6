/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Bounded, linear undo/redo log of full graph snapshots.
//!
//! Pushing after an undo drops the redo branch; there is no history tree.
//! Every snapshot handed out is a fresh copy owned by the caller.

use std::collections::VecDeque;

use log::debug;

use crate::graph::{Edge, GraphSnapshot, Node};

/// Snapshots kept before the oldest is evicted
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<GraphSnapshot>,
    /// Index of the active snapshot; None only while `entries` is empty.
    cursor: Option<usize>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A capacity of zero is raised to one so the active state is always kept.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    /// Record a deep copy of the given graph state as the new active snapshot.
    pub fn push(&mut self, nodes: &[Node], edges: &[Edge]) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }

        self.entries.push_back(GraphSnapshot::new(nodes, edges));
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = Some(self.entries.len() - 1);

        debug!("State saved ({} in history)", self.entries.len());
    }

    /// Step back one snapshot. None when already at the oldest entry.
    pub fn undo(&mut self) -> Option<GraphSnapshot> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        debug!("Undo ({}/{})", cursor + 1, self.entries.len());
        self.entries.get(cursor).cloned()
    }

    /// Step forward one snapshot. None when already at the newest entry.
    pub fn redo(&mut self) -> Option<GraphSnapshot> {
        let cursor = self.cursor.filter(|&c| c + 1 < self.entries.len())? + 1;
        self.cursor = Some(cursor);
        debug!("Redo ({}/{})", cursor + 1, self.entries.len());
        self.entries.get(cursor).cloned()
    }

    /// The active snapshot, if any
    pub fn current(&self) -> Option<&GraphSnapshot> {
        self.entries.get(self.cursor?)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every snapshot
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
