//! Undo history - snapshot-based rollback of grid and score.

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::types::DEFAULT_UNDO_DEPTH;

/// A saved grid and the score that went with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub grid: Grid,
    pub score: u32,
}

/// Bounded stack of [`HistoryEntry`] snapshots, newest at the back.
///
/// Entries are independent copies; nothing here aliases the live grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl History {
    /// Create a history that keeps at most `limit` entries (minimum 1)
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Push a copy of `grid` and `score`, evicting the oldest entry past the limit.
    pub fn snapshot(&mut self, grid: &Grid, score: u32) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            grid: *grid,
            score,
        });
    }

    /// Pop the most recent snapshot. None when the stack is empty.
    pub fn rollback(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    /// True iff `grid` differs from the most recent snapshot in any cell.
    ///
    /// With no snapshot to compare against there is nothing to report as changed.
    pub fn peek_changed(&self, grid: &Grid) -> bool {
        self.entries
            .back()
            .map(|top| top.grid != *grid)
            .unwrap_or(false)
    }

    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_DEPTH)
    }
}
