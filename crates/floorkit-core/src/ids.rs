//! Identifier generation for placed elements and saved layouts.
//!
//! Identifiers are opaque strings. They carry a readable prefix so that a
//! serialized layout stays easy to inspect, followed by a random v4 UUID.

use uuid::Uuid;

/// Generates a fresh element id derived from the template it was created from.
///
/// ```
/// let id = floorkit_core::generate_element_id("round-table-4");
/// assert!(id.starts_with("round-table-4-"));
/// ```
pub fn generate_element_id(template_id: &str) -> String {
    format!("{}-{}", template_id, Uuid::new_v4().simple())
}

/// Generates a fresh saved layout id.
pub fn generate_layout_id() -> String {
    format!("layout-{}", Uuid::new_v4().simple())
}
