//! Linear undo/redo history over task snapshots

use tracing::debug;

use super::model::{Snapshot, TaskId};

/// One recorded change to a single task.
///
/// `before` is what undo restores, `after` is what redo re-applies. Either
/// side may be the deletion marker (an add has no `before`, a delete has no
/// `after`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub task: TaskId,
    /// Index of the task in the list when the change was made
    pub position: usize,
    pub before: Snapshot,
    pub after: Snapshot,
}

/// Two-stack history. The oldest entry on the undo stack is the baseline and
/// is never undone.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a fresh change. Clears the redo stack.
    pub fn record(&mut self, entry: HistoryEntry) {
        if !self.redo_stack.is_empty() {
            debug!(
                discarded = self.redo_stack.len(),
                "New change recorded, dropping redo history"
            );
            self.redo_stack.clear();
        }
        self.undo_stack.push(entry);
    }

    /// Move the newest change onto the redo stack and return it so the caller
    /// can apply its `before` snapshot.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(entry);
        self.redo_stack.last()
    }

    /// Move the most recently undone change back onto the undo stack and
    /// return it so the caller can apply its `after` snapshot.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(entry);
        self.undo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
