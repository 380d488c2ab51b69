//! # Element Template Catalog
//!
//! Templates are the palette entries a placed element is instantiated from.
//! Each one carries the defaults copied onto a new element: size, outline,
//! color, seat count and an optional label.
//!
//! Features:
//! - Built-in catalog covering every [`ElementCategory`]
//! - Lookup by id and listing by category
//! - Case-insensitive search over name, id and category
//! - Custom templates added at runtime

use floorkit_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::model::{ElementCategory, ElementShape};

/// Catalog entry used to create placed elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementTemplate {
    /// Unique template identifier
    pub id: String,
    /// Display name
    pub name: String,
    pub category: ElementCategory,
    pub default_width: f64,
    pub default_height: f64,
    pub shape: ElementShape,
    pub color: String,
    #[serde(default)]
    pub seats: Option<u32>,
    #[serde(default)]
    pub label: Option<String>,
    /// Icon name for the palette
    pub icon: String,
}

impl ElementTemplate {
    /// Create new template without seats or label
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ElementCategory,
        size: (f64, f64),
        shape: ElementShape,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            default_width: size.0,
            default_height: size.1,
            shape,
            color: color.into(),
            seats: None,
            label: None,
            icon: icon.into(),
        }
    }

    /// Set default seat count
    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = Some(seats);
        self
    }

    /// Set default label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Matches search query
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.id.to_lowercase().contains(&q)
            || self.category.as_str().contains(&q)
    }
}

/// Ordered collection of templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateCatalog {
    templates: Vec<ElementTemplate>,
}

impl TemplateCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog shipped with the builder.
    pub fn builtin() -> Self {
        use ElementCategory::*;
        use ElementShape::*;

        let templates = vec![
            ElementTemplate::new("round-table-2", "Round Table (2)", Tables, (60.0, 60.0), Circle, "#8B5A2B", "circle")
                .with_seats(2),
            ElementTemplate::new("round-table-4", "Round Table (4)", Tables, (80.0, 80.0), Circle, "#8B5A2B", "circle")
                .with_seats(4),
            ElementTemplate::new("square-table-4", "Square Table (4)", Tables, (80.0, 80.0), Square, "#8B5A2B", "square")
                .with_seats(4),
            ElementTemplate::new("rect-table-6", "Rectangular Table (6)", Tables, (120.0, 70.0), Rectangle, "#8B5A2B", "rectangle-horizontal")
                .with_seats(6),
            ElementTemplate::new("banquet-table-10", "Banquet Table (10)", Tables, (200.0, 80.0), Rectangle, "#6D4C41", "rectangle-horizontal")
                .with_seats(10),
            ElementTemplate::new("booth-4", "Booth (4)", Seating, (120.0, 90.0), Rectangle, "#5D4037", "sofa")
                .with_seats(4),
            ElementTemplate::new("banquette", "Banquette", Seating, (200.0, 50.0), Rectangle, "#5D4037", "armchair")
                .with_seats(5),
            ElementTemplate::new("lounge-chair", "Lounge Chair", Seating, (50.0, 50.0), Square, "#795548", "armchair")
                .with_seats(1),
            ElementTemplate::new("bar-counter", "Bar Counter", Bar, (240.0, 60.0), Rectangle, "#3E2723", "wine")
                .with_label("Bar"),
            ElementTemplate::new("bar-stool", "Bar Stool", Bar, (30.0, 30.0), Circle, "#4E342E", "circle-dot")
                .with_seats(1),
            ElementTemplate::new("host-stand", "Host Stand", Service, (60.0, 40.0), Rectangle, "#37474F", "concierge-bell")
                .with_label("Host"),
            ElementTemplate::new("service-station", "Service Station", Service, (80.0, 50.0), Rectangle, "#455A64", "utensils"),
            ElementTemplate::new("kitchen-pass", "Kitchen Pass", Service, (160.0, 40.0), Rectangle, "#263238", "chef-hat")
                .with_label("Pass"),
            ElementTemplate::new("sideboard", "Sideboard", Furniture, (120.0, 40.0), Rectangle, "#A1887F", "archive"),
            ElementTemplate::new("high-top", "High Top", Furniture, (50.0, 50.0), Circle, "#A1887F", "circle"),
            ElementTemplate::new("plant", "Plant", Decorations, (40.0, 40.0), Circle, "#2E7D32", "leaf"),
            ElementTemplate::new("divider", "Divider", Decorations, (120.0, 10.0), Rectangle, "#9E9E9E", "minus"),
            ElementTemplate::new("pillar", "Pillar", Decorations, (40.0, 40.0), Square, "#BDBDBD", "square"),
        ];

        Self { templates }
    }

    /// Add template to catalog
    pub fn add(&mut self, template: ElementTemplate) -> Result<()> {
        if self.get(&template.id).is_some() {
            return Err(Error::DuplicateTemplate { id: template.id });
        }
        self.templates.push(template);
        Ok(())
    }

    /// Get template by ID
    pub fn get(&self, id: &str) -> Option<&ElementTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Get all templates
    pub fn list_all(&self) -> &[ElementTemplate] {
        &self.templates
    }

    /// Get templates by category
    pub fn list_by_category(&self, category: ElementCategory) -> Vec<&ElementTemplate> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Categories that have at least one template, in palette order.
    pub fn categories(&self) -> Vec<ElementCategory> {
        ElementCategory::ALL
            .into_iter()
            .filter(|c| self.templates.iter().any(|t| t.category == *c))
            .collect()
    }

    /// Search templates by query
    pub fn search(&self, query: &str) -> Vec<&ElementTemplate> {
        self.templates
            .iter()
            .filter(|t| t.matches_search(query))
            .collect()
    }

    /// Get template count
    pub fn count(&self) -> usize {
        self.templates.len()
    }
}
