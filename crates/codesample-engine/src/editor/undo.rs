use codesample_markup::Document;

use super::Selection;

/// One restorable editor state.
#[derive(Debug, Clone)]
pub(crate) struct Level {
    pub(crate) doc: Document,
    pub(crate) selection: Selection,
}

/// Whole-document undo history.
///
/// Each completed top-level transaction that changed the document pushes the
/// state from *before* it. Node handles survive cloning, so a restored level
/// keeps its selection meaningful.
#[derive(Debug, Default)]
pub struct UndoManager {
    undo: Vec<Level>,
    redo: Vec<Level>,
    in_transaction: bool,
}

impl UndoManager {
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn has_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn has_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub(crate) fn in_transaction(&self) -> bool {
        self.in_transaction
    }

    pub(crate) fn begin(&mut self) {
        self.in_transaction = true;
    }

    pub(crate) fn end(&mut self) {
        self.in_transaction = false;
    }

    /// Record the state before a completed transaction. New edits invalidate
    /// the redo branch.
    pub(crate) fn record(&mut self, before: Level) {
        self.undo.push(before);
        self.redo.clear();
    }

    /// Swap `current` for the previous level.
    pub(crate) fn undo(&mut self, current: Level) -> Result<Level, Level> {
        match self.undo.pop() {
            Some(previous) => {
                self.redo.push(current);
                Ok(previous)
            }
            None => Err(current),
        }
    }

    /// Swap `current` for the next level.
    pub(crate) fn redo(&mut self, current: Level) -> Result<Level, Level> {
        match self.redo.pop() {
            Some(next) => {
                self.undo.push(current);
                Ok(next)
            }
            None => Err(current),
        }
    }
}
