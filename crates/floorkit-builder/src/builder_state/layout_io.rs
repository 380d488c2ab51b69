//! Conversion between builder state and saved layout records.

use super::FloorplanBuilder;
use crate::layout::SavedLayout;

impl FloorplanBuilder {
    /// Builds a record of the current elements under `name`.
    pub fn to_layout(&self, name: impl Into<String>) -> SavedLayout {
        SavedLayout::new(name, self.elements.clone())
    }

    /// Writes the current elements into an existing record.
    pub fn update_layout(&self, layout: &mut SavedLayout) {
        layout.update_elements(self.elements.clone());
    }

    /// Reinitializes the session from a record.
    ///
    /// Selection is cleared and the history restarts with the loaded elements
    /// as its only entry. View settings are kept.
    pub fn load_layout(&mut self, layout: &SavedLayout) {
        self.elements = layout.elements.clone();
        self.selected_id = None;
        self.history.reset(self.elements.clone());
        tracing::info!(
            "Loaded layout '{}' ({} elements, {} seats)",
            layout.name,
            layout.elements.len(),
            layout.total_seats
        );
    }
}
