//! # Undo History
//!
//! Bounded stack of prior forest snapshots.
//!
//! ## Design
//!
//! - Every committed change pushes the forest it replaced, newest first
//! - Undo pops the newest snapshot and reinstates it wholesale
//! - The stack holds at most [`SNAPSHOT_LIMIT`] entries; older states
//!   fall off the far end and are unrecoverable
//! - There is no redo stack: an undone state is consumed
//!
//! Snapshots are full copies. Nothing in here aliases the live forest,
//! so later edits can never corrupt a restore point.

use std::collections::VecDeque;

use collage_model::Forest;

/// Number of snapshots retained by default.
pub const SNAPSHOT_LIMIT: usize = 20;

/// Stack of prior forest snapshots, newest first.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Forest>,

    /// Maximum number of snapshots (0 = unlimited)
    limit: usize,
}

impl History {
    /// Create a history bounded to [`SNAPSHOT_LIMIT`] entries.
    pub fn new() -> Self {
        Self::with_limit(SNAPSHOT_LIMIT)
    }

    /// Create a history with a custom snapshot limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit,
        }
    }

    /// Push the forest a commit is replacing; the oldest snapshot is
    /// evicted once the limit is exceeded.
    pub fn push(&mut self, forest: Forest) {
        self.snapshots.push_front(forest);
        if self.limit > 0 && self.snapshots.len() > self.limit {
            self.snapshots.truncate(self.limit);
        }
    }

    /// Take the most recent snapshot.
    pub fn pop(&mut self) -> Option<Forest> {
        self.snapshots.pop_front()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Number of snapshots currently held.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Drop all snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
