//! Element model for the floorplan canvas.
//!
//! A [`PlacedElement`] is one piece of furniture, seating or decor placed on
//! the floor. Elements are plain values: the builder replaces them wholesale
//! on every edit and keeps owned copies in its history.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog category an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    /// Dining tables
    Tables,
    /// Chairs-free furniture (sideboards, high tops without seats)
    Furniture,
    /// Plants, dividers and other decor
    Decorations,
    /// Bar counters and stools
    Bar,
    /// Host stands, service stations, kitchen pass
    Service,
    /// Booths, banquettes and lounge seating
    Seating,
}

impl ElementCategory {
    /// All categories in palette order.
    pub const ALL: [ElementCategory; 6] = [
        ElementCategory::Tables,
        ElementCategory::Seating,
        ElementCategory::Bar,
        ElementCategory::Service,
        ElementCategory::Furniture,
        ElementCategory::Decorations,
    ];

    /// Get category as string
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::Tables => "tables",
            ElementCategory::Furniture => "furniture",
            ElementCategory::Decorations => "decorations",
            ElementCategory::Bar => "bar",
            ElementCategory::Service => "service",
            ElementCategory::Seating => "seating",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tables" => Some(ElementCategory::Tables),
            "furniture" => Some(ElementCategory::Furniture),
            "decorations" => Some(ElementCategory::Decorations),
            "bar" => Some(ElementCategory::Bar),
            "service" => Some(ElementCategory::Service),
            "seating" => Some(ElementCategory::Seating),
            _ => None,
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outline drawn for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementShape {
    Rectangle,
    Square,
    Circle,
    Oval,
}

/// One item placed on the floorplan canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedElement {
    pub id: String,
    pub template_id: String,
    pub category: ElementCategory,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, not normalized.
    #[serde(default)]
    pub rotation: f64,
    pub shape: ElementShape,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    /// Persisted with the element; edits are not blocked by it.
    #[serde(default)]
    pub locked: bool,
}

fn default_opacity() -> f64 {
    1.0
}

impl PlacedElement {
    /// Seats contributed to the floor total.
    pub fn seat_count(&self) -> u32 {
        self.seats.unwrap_or(0)
    }

    /// Label shown on the canvas, falling back to the template id.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.template_id)
    }

    /// Applies a partial update in place.
    pub fn apply(&mut self, update: &ElementUpdate) {
        if let Some(x) = update.x {
            self.x = x;
        }
        if let Some(y) = update.y {
            self.y = y;
        }
        if let Some(width) = update.width {
            self.width = width;
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        if let Some(rotation) = update.rotation {
            self.rotation = rotation;
        }
        if let Some(shape) = update.shape {
            self.shape = shape;
        }
        if let Some(color) = &update.color {
            self.color = color.clone();
        }
        if let Some(opacity) = update.opacity {
            self.opacity = opacity;
        }
        if let Some(label) = &update.label {
            self.label = label.clone();
        }
        if let Some(seats) = update.seats {
            self.seats = seats;
        }
        if let Some(locked) = update.locked {
            self.locked = locked;
        }
    }
}

/// Partial set of element fields for `update_element`.
///
/// `label` and `seats` are doubly optional: `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub shape: Option<ElementShape>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
    pub label: Option<Option<String>>,
    pub seats: Option<Option<u32>>,
    pub locked: Option<bool>,
}

impl ElementUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn shape(mut self, shape: ElementShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn label(mut self, label: Option<String>) -> Self {
        self.label = Some(label);
        self
    }

    pub fn seats(mut self, seats: Option<u32>) -> Self {
        self.seats = Some(seats);
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
