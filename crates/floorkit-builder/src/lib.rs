//! # Floorkit Builder
//!
//! Editor state for laying out a restaurant floor: tables, seating, bar and
//! service furniture, and decor placed on a grid canvas.
//!
//! ## Core Components
//!
//! - **Model**: [`PlacedElement`] and partial [`ElementUpdate`]s
//! - **Templates**: palette entries new elements are created from
//! - **Canvas**: zoom, pan and grid settings with snap-to-grid
//! - **History**: bounded snapshot history behind undo/redo
//! - **Layouts**: JSON records of a named floorplan
//!
//! ## Architecture
//!
//! ```text
//! FloorplanBuilder
//!   ├── elements (z-ordered, last on top)
//!   ├── selection
//!   ├── CanvasState (view only, not undoable)
//!   └── History (snapshots of elements, capped)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use floorkit_builder::{FloorplanBuilder, TemplateCatalog};
//!
//! let catalog = TemplateCatalog::builtin();
//! let mut builder = FloorplanBuilder::new();
//!
//! let table = catalog.get("round-table-4").unwrap();
//! let id = builder.add_element(table, 40.0, 40.0);
//! builder.duplicate_element(&id);
//! assert_eq!(builder.total_seats(), 8);
//!
//! builder.undo();
//! assert_eq!(builder.total_seats(), 4);
//! ```

pub mod builder_state;
pub mod canvas;
pub mod history;
pub mod layout;
pub mod model;
pub mod options;
pub mod templates;

pub use builder_state::FloorplanBuilder;
pub use canvas::CanvasState;
pub use history::{History, HistoryEntry};
pub use layout::SavedLayout;
pub use model::{ElementCategory, ElementShape, ElementUpdate, PlacedElement};
pub use options::{BuilderOptions, MAX_HISTORY};
pub use templates::{ElementTemplate, TemplateCatalog};
