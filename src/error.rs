//! Structured error types for rostergrid.
//!
//! Every fallible operation in the crate returns [`Result`]; no error here is
//! fatal, and all of them leave internal state consistent.

/// All errors that can occur in rostergrid operations.
#[derive(Debug, thiserror::Error)]
pub enum RostergridError {
    /// An interval would overlap a sibling interval on the same entity.
    #[error("interval [{start}, {end}] overlaps an existing interval of entity {entity_id}")]
    Overlap {
        /// Owning entity id.
        entity_id: String,
        /// Candidate start date (inclusive), ISO format.
        start: String,
        /// Candidate end date (inclusive), ISO format.
        end: String,
    },

    /// Referenced entity id does not exist in the roster.
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// Referenced interval id does not exist on any entity.
    #[error("interval not found: {0}")]
    IntervalNotFound(String),

    /// Interval dates failed validation before any mutation was applied.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// The paged data provider failed to deliver a page.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RostergridError>;

impl From<String> for RostergridError {
    fn from(s: String) -> Self {
        Self::Provider(s)
    }
}

impl From<&str> for RostergridError {
    fn from(s: &str) -> Self {
        Self::Provider(s.to_string())
    }
}
