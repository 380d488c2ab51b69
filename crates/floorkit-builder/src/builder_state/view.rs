//! Viewport operations (zoom, pan, grid, snapping) for builder state.
//! None of these touch the edit history.

use super::FloorplanBuilder;

impl FloorplanBuilder {
    pub fn zoom_in(&mut self) {
        self.canvas.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.canvas.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.canvas.reset_zoom();
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.canvas.set_zoom(zoom);
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.canvas.set_pan(x, y);
    }

    pub fn toggle_grid(&mut self) {
        self.canvas.toggle_grid();
    }

    pub fn toggle_snap(&mut self) {
        self.canvas.toggle_snap();
    }

    pub fn set_grid_size(&mut self, size: f64) {
        self.canvas.set_grid_size(size);
    }

    /// Rounds `value` to the grid when snapping is on, otherwise returns it unchanged.
    pub fn snap_value(&self, value: f64) -> f64 {
        self.canvas.snap_value(value)
    }
}
