//! Error handling for Floorkit
//!
//! Editor operations themselves never fail: unknown ids are ignored and
//! out-of-range numbers are clamped. The error type here covers the edges
//! of the system instead:
//! - Template catalog maintenance
//! - Layout record (de)serialization
//!
//! Settings have their own error type in `floorkit-settings`.

use thiserror::Error;

/// Main error type for Floorkit
#[derive(Error, Debug)]
pub enum Error {
    /// A template with the same id is already in the catalog
    #[error("Template with ID '{id}' already exists")]
    DuplicateTemplate {
        /// The conflicting template id.
        id: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
