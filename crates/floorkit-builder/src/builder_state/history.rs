//! Undo/redo for builder state.

use super::FloorplanBuilder;

impl FloorplanBuilder {
    /// Restores the previous snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.elements = snapshot.to_vec();
                self.drop_stale_selection();
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.elements = snapshot.to_vec();
                self.drop_stale_selection();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Cursor position within the history.
    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = &self.selected_id {
            if !self.elements.iter().any(|e| &e.id == id) {
                self.selected_id = None;
            }
        }
    }
}
