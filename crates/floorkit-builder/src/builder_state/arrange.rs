//! Z-order operations for builder state.

use super::FloorplanBuilder;

impl FloorplanBuilder {
    /// Moves the element to the end of the list (drawn on top).
    pub fn bring_to_front(&mut self, id: &str) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };
        let element = self.elements.remove(index);
        self.elements.push(element);
        self.commit("bring_to_front");
        true
    }

    /// Moves the element to the start of the list (drawn underneath).
    pub fn send_to_back(&mut self, id: &str) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };
        let element = self.elements.remove(index);
        self.elements.insert(0, element);
        self.commit("send_to_back");
        true
    }
}
