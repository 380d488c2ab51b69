//! Element operations (add, update, delete, duplicate, clear) for builder state.

use super::FloorplanBuilder;
use crate::model::{ElementUpdate, PlacedElement};
use crate::templates::ElementTemplate;

impl FloorplanBuilder {
    /// Places a new element built from `template` at (`x`, `y`) and selects it.
    ///
    /// Position is taken as given; off-canvas placement is allowed.
    pub fn add_element(&mut self, template: &ElementTemplate, x: f64, y: f64) -> String {
        let id = floorkit_core::generate_element_id(&template.id);
        let element = PlacedElement {
            id: id.clone(),
            template_id: template.id.clone(),
            category: template.category,
            x,
            y,
            width: template.default_width,
            height: template.default_height,
            rotation: 0.0,
            shape: template.shape,
            color: template.color.clone(),
            opacity: 1.0,
            label: template.label.clone(),
            seats: template.seats,
            locked: false,
        };

        self.elements.push(element);
        self.selected_id = Some(id.clone());
        self.commit("add");
        id
    }

    /// Merges `update` into the element with `id`.
    ///
    /// A history entry is committed on every call, including calls that match
    /// no element.
    pub fn update_element(&mut self, id: &str, update: &ElementUpdate) -> bool {
        let found = match self.elements.iter_mut().find(|e| e.id == id) {
            Some(element) => {
                element.apply(update);
                true
            }
            None => {
                tracing::debug!("update_element: no element with id {}", id);
                false
            }
        };
        self.commit("update");
        found
    }

    /// Moves an element, snapping the position to the grid when enabled.
    pub fn move_element(&mut self, id: &str, x: f64, y: f64) -> bool {
        let update = ElementUpdate::new().position(self.snap_value(x), self.snap_value(y));
        self.update_element(id, &update)
    }

    /// Resizes an element, snapping to the grid when enabled.
    ///
    /// Sizes never drop below one grid cell while snapping, or 1 unit otherwise.
    pub fn resize_element(&mut self, id: &str, width: f64, height: f64) -> bool {
        let min = if self.canvas.snap_to_grid() {
            self.canvas.grid_size()
        } else {
            1.0
        };
        let update = ElementUpdate::new().size(
            self.snap_value(width).max(min),
            self.snap_value(height).max(min),
        );
        self.update_element(id, &update)
    }

    pub fn rotate_element(&mut self, id: &str, degrees: f64) -> bool {
        self.update_element(id, &ElementUpdate::new().rotation(degrees))
    }

    /// Removes the element with `id`, clearing the selection if it was selected.
    pub fn delete_element(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        let removed = self.elements.len() != before;

        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        self.commit("delete");
        removed
    }

    /// Copies the element with `id`, offset so it does not cover the original.
    ///
    /// Returns the id of the copy, which becomes the selection.
    pub fn duplicate_element(&mut self, id: &str) -> Option<String> {
        let mut copy = self.element(id)?.clone();
        copy.id = floorkit_core::generate_element_id(&copy.template_id);
        copy.x += self.options.duplicate_offset;
        copy.y += self.options.duplicate_offset;

        let new_id = copy.id.clone();
        self.elements.push(copy);
        self.selected_id = Some(new_id.clone());
        self.commit("duplicate");
        Some(new_id)
    }

    /// Removes every element. Earlier history stays undoable.
    pub fn clear_all(&mut self) {
        self.elements.clear();
        self.selected_id = None;
        self.commit("clear");
    }
}
