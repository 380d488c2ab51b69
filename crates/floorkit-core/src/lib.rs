//! # Floorkit Core
//!
//! Core types shared by the Floorkit crates: the unified error type and
//! element identifier generation.

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::{generate_element_id, generate_layout_id};
