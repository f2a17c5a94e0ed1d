//! Store error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in the store and the simulation data service.
///
/// The pure planning core has no error path; everything here comes from the
/// collaborator boundary (input validation, lookups, persistence I/O).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Command is empty")]
    EmptyCommand,

    #[error("Shot plan not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }
}
