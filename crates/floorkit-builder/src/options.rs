//! Tunable limits for a builder session.

use serde::{Deserialize, Serialize};

/// Maximum number of history entries kept by default.
pub const MAX_HISTORY: usize = 50;
/// Multiplicative zoom step (20%).
pub const ZOOM_STEP: f64 = 0.2;
pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 5.0;
pub const DEFAULT_GRID_SIZE: f64 = 20.0;
/// Offset applied to both axes of a duplicated element.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Options applied when a builder session is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    pub max_history: usize,
    pub zoom_step: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub grid_size: f64,
    pub show_grid: bool,
    pub snap_to_grid: bool,
    pub duplicate_offset: f64,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            max_history: MAX_HISTORY,
            zoom_step: ZOOM_STEP,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            grid_size: DEFAULT_GRID_SIZE,
            show_grid: true,
            snap_to_grid: true,
            duplicate_offset: DUPLICATE_OFFSET,
        }
    }
}
