//! Seat and element summaries for saved layouts.

use std::collections::BTreeMap;
use std::fmt;

use floorkit_builder::{ElementCategory, FloorplanBuilder};

/// Totals for one floorplan.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    pub name: String,
    pub element_count: usize,
    pub total_seats: u32,
    /// Element and seat counts per category, only for categories present.
    pub by_category: BTreeMap<&'static str, CategoryTotals>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    pub elements: usize,
    pub seats: u32,
}

impl LayoutSummary {
    pub fn from_builder(name: impl Into<String>, builder: &FloorplanBuilder) -> Self {
        let mut by_category: BTreeMap<&'static str, CategoryTotals> = BTreeMap::new();
        for element in builder.elements() {
            let totals = by_category.entry(element.category.as_str()).or_default();
            totals.elements += 1;
            totals.seats = totals.seats.saturating_add(element.seat_count());
        }

        Self {
            name: name.into(),
            element_count: builder.element_count(),
            total_seats: builder.total_seats(),
            by_category,
        }
    }

    pub fn category(&self, category: ElementCategory) -> CategoryTotals {
        self.by_category
            .get(category.as_str())
            .copied()
            .unwrap_or_default()
    }
}

impl fmt::Display for LayoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} elements, {} seats",
            self.name, self.element_count, self.total_seats
        )?;
        for (category, totals) in &self.by_category {
            writeln!(
                f,
                "  {:<12} {:>3} elements {:>4} seats",
                category, totals.elements, totals.seats
            )?;
        }
        Ok(())
    }
}
