//! Floorplan builder state.
//! Owns the placed elements, the selection, the canvas view and the edit
//! history for one editing session.
//!
//! This module is split into submodules for better organization:
//! - `elements`: Add, update, delete, duplicate and clear
//! - `arrange`: Z-order changes
//! - `history`: Undo/redo
//! - `view`: Zoom, pan, grid and snapping
//! - `layout_io`: Conversion to and from saved layout records

mod arrange;
mod elements;
mod history;
mod layout_io;
mod view;

use crate::canvas::CanvasState;
use crate::history::History;
use crate::model::PlacedElement;
use crate::options::BuilderOptions;

/// In-memory editor model for one floorplan.
///
/// Array order is z-order: the last element is drawn on top. Every element
/// edit commits a snapshot to the history; view changes and selection do not.
/// Operations given an unknown id leave the elements untouched and report it
/// by returning `false`.
#[derive(Debug, Clone)]
pub struct FloorplanBuilder {
    elements: Vec<PlacedElement>,
    selected_id: Option<String>,
    canvas: CanvasState,
    history: History,
    options: BuilderOptions,
}

impl FloorplanBuilder {
    /// Creates an empty builder with default options.
    pub fn new() -> Self {
        Self::with_options(BuilderOptions::default())
    }

    /// Creates an empty builder.
    pub fn with_options(options: BuilderOptions) -> Self {
        Self::with_elements(options, Vec::new())
    }

    /// Creates a builder whose history starts at `elements`.
    pub fn with_elements(options: BuilderOptions, elements: Vec<PlacedElement>) -> Self {
        Self {
            canvas: CanvasState::new(&options),
            history: History::new(options.max_history, elements.clone()),
            elements,
            selected_id: None,
            options,
        }
    }

    /// Elements in z-order (last is topmost).
    pub fn elements(&self) -> &[PlacedElement] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&PlacedElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The selected element, if the selection still refers to one.
    pub fn selected_element(&self) -> Option<&PlacedElement> {
        self.selected_id.as_deref().and_then(|id| self.element(id))
    }

    /// Selects `id`; an id that is not on the canvas clears the selection.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected_id = id
            .filter(|id| self.element(id).is_some())
            .map(str::to_string);
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Sum of seats across all elements.
    pub fn total_seats(&self) -> u32 {
        crate::layout::seat_total(&self.elements)
    }

    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Records the live elements as a new history entry.
    fn commit(&mut self, action: &str) {
        self.history.commit(self.elements.clone());
        tracing::debug!(
            action,
            elements = self.elements.len(),
            history = self.history.len(),
            "Committed floorplan edit"
        );
    }
}

impl Default for FloorplanBuilder {
    fn default() -> Self {
        Self::new()
    }
}
