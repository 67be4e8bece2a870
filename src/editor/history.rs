use std::collections::VecDeque;

/// Default number of checkpoints kept by the editor.
pub const HISTORY_LIMIT: usize = 50;

/// Bounded undo/redo history of snapshots.
///
/// `checkpoint` records the state *before* an edit. `undo` swaps the live state with the newest
/// checkpoint and moves the live state onto the redo stack; `redo` does the reverse. A new
/// checkpoint discards everything that could be redone. The oldest checkpoint is dropped once
/// `limit` is exceeded.
#[derive(Clone, Debug)]
pub struct History<T> {
    undo: VecDeque<T>,
    redo: Vec<T>,
    limit: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(HISTORY_LIMIT)
    }
}

impl<T> History<T> {
    /// Create an empty history holding at most `limit` checkpoints (at least one).
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record `snapshot` as the newest checkpoint.
    pub fn checkpoint(&mut self, snapshot: T) {
        self.redo.clear();
        if self.undo.len() == self.limit {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }

    /// Step back. Returns the state to restore, or `None` (leaving `current` unused) when there
    /// is nothing to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let restored = self.undo.pop_back()?;
        self.redo.push(current);
        Some(restored)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let restored = self.redo.pop()?;
        self.undo.push_back(current);
        Some(restored)
    }

    /// Whether `undo` would restore something.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether `redo` would restore something.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo checkpoints held.
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    /// Whether no undo checkpoints are held.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Drop every checkpoint.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/history.rs"]
mod tests;
