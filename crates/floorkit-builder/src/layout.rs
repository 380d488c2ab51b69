//! Saved layout records.
//!
//! A layout is the JSON record handed to whatever stores named floorplans:
//! the element list plus bookkeeping (id, name, seat total, timestamps).
//! Where the record is kept is up to the caller.

use chrono::{DateTime, Utc};
use floorkit_core::Result;
use serde::{Deserialize, Serialize};

use crate::model::PlacedElement;

/// Named snapshot of a floorplan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLayout {
    pub id: String,
    pub name: String,
    pub elements: Vec<PlacedElement>,
    pub total_seats: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedLayout {
    /// Create a new record with a fresh id
    pub fn new(name: impl Into<String>, elements: Vec<PlacedElement>) -> Self {
        let now = Utc::now();
        Self {
            id: floorkit_core::generate_layout_id(),
            name: name.into(),
            total_seats: seat_total(&elements),
            elements,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the elements, keeping id and creation time.
    pub fn update_elements(&mut self, elements: Vec<PlacedElement>) {
        self.total_seats = seat_total(&elements);
        self.elements = elements;
        self.updated_at = Utc::now();
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a record previously produced by [`SavedLayout::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        let mut layout: SavedLayout = serde_json::from_str(json)?;

        let computed = seat_total(&layout.elements);
        if layout.total_seats != computed {
            tracing::warn!(
                "Layout '{}' stored {} seats but elements hold {}; using element count",
                layout.name,
                layout.total_seats,
                computed
            );
            layout.total_seats = computed;
        }

        Ok(layout)
    }
}

/// Seat total, saturating at `u32::MAX`.
pub(crate) fn seat_total(elements: &[PlacedElement]) -> u32 {
    elements
        .iter()
        .fold(0u32, |acc, e| acc.saturating_add(e.seat_count()))
}
