//! Bounded linear edit history.
//!
//! Every committed edit stores an owned snapshot of the whole element list.
//! A cursor marks the entry matching the live state; committing after an
//! undo discards everything past the cursor.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use crate::model::PlacedElement;

/// Snapshot of the element list at one point in the edit history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub elements: Vec<PlacedElement>,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(elements: Vec<PlacedElement>) -> Self {
        Self {
            elements,
            timestamp: Utc::now(),
        }
    }
}

/// Snapshot history with a cursor.
///
/// Invariant: `index < entries.len()` whenever `entries` is non-empty.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    index: usize,
    capacity: usize,
}

impl History {
    /// Creates a history seeded with one snapshot of `initial`.
    pub fn new(capacity: usize, initial: Vec<PlacedElement>) -> Self {
        let mut history = Self {
            entries: VecDeque::with_capacity(capacity.max(1)),
            index: 0,
            capacity: capacity.max(1),
        };
        history.reset(initial);
        history
    }

    /// Drops every entry and seeds a single snapshot.
    pub fn reset(&mut self, initial: Vec<PlacedElement>) {
        self.entries.clear();
        self.entries.push_back(HistoryEntry::new(initial));
        self.index = 0;
    }

    /// Records a new snapshot after the cursor.
    pub fn commit(&mut self, elements: Vec<PlacedElement>) {
        self.entries.truncate(self.index + 1);
        self.entries.push_back(HistoryEntry::new(elements));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            tracing::debug!("History trimmed to {} entries", self.capacity);
        }
        self.index = self.entries.len() - 1;
    }

    /// Moves the cursor back one entry and returns its snapshot.
    pub fn undo(&mut self) -> Option<&[PlacedElement]> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).map(|e| e.elements.as_slice())
    }

    /// Moves the cursor forward one entry and returns its snapshot.
    pub fn redo(&mut self) -> Option<&[PlacedElement]> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index).map(|e| e.elements.as_slice())
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.index + 1 < self.entries.len()
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
