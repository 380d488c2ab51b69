//! Canvas view state: zoom, pan and grid.
//!
//! View changes are never recorded in the edit history. Numeric input is
//! clamped rather than rejected; non-finite values are ignored.

use crate::options::BuilderOptions;

/// Smallest grid cell accepted by [`CanvasState::set_grid_size`].
pub const MIN_GRID_SIZE: f64 = 1.0;

/// View transform and grid configuration for one builder session.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasState {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    grid_size: f64,
    show_grid: bool,
    snap_to_grid: bool,
    limits: ZoomLimits,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ZoomLimits {
    step: f64,
    min: f64,
    max: f64,
}

impl CanvasState {
    /// Creates a canvas at 100% zoom with no pan.
    pub fn new(options: &BuilderOptions) -> Self {
        Self {
            zoom: 1.0_f64.max(options.min_zoom).min(options.max_zoom),
            pan_x: 0.0,
            pan_y: 0.0,
            grid_size: options.grid_size.max(MIN_GRID_SIZE),
            show_grid: options.show_grid,
            snap_to_grid: options.snap_to_grid,
            limits: ZoomLimits {
                step: options.zoom_step,
                min: options.min_zoom,
                max: options.max_zoom,
            },
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn min_zoom(&self) -> f64 {
        self.limits.min
    }

    pub fn max_zoom(&self) -> f64 {
        self.limits.max
    }

    /// Sets the zoom level, clamped to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            tracing::warn!("Ignoring non-finite zoom {}", zoom);
            return;
        }
        self.zoom = zoom.max(self.limits.min).min(self.limits.max);
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * (1.0 + self.limits.step));
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom * (1.0 - self.limits.step));
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.set_zoom(1.0);
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset. Pan is unbounded.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!("Ignoring non-finite pan ({}, {})", x, y);
            return;
        }
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Sets the grid cell size; values below [`MIN_GRID_SIZE`] are raised to it.
    pub fn set_grid_size(&mut self, size: f64) {
        if !size.is_finite() {
            tracing::warn!("Ignoring non-finite grid size {}", size);
            return;
        }
        if size < MIN_GRID_SIZE {
            tracing::warn!("Grid size {} clamped to {}", size, MIN_GRID_SIZE);
        }
        self.grid_size = size.max(MIN_GRID_SIZE);
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn toggle_snap(&mut self) {
        self.snap_to_grid = !self.snap_to_grid;
    }

    /// Rounds `value` to the nearest grid multiple when snapping is enabled.
    pub fn snap_value(&self, value: f64) -> f64 {
        if self.snap_to_grid {
            (value / self.grid_size).round() * self.grid_size
        } else {
            value
        }
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(&BuilderOptions::default())
    }
}
