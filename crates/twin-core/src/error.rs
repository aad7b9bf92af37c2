//! Error types for the car state store

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the state store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Request payload could not be parsed into a well-formed state
    #[error("Invalid car state payload: {0}")]
    Validation(String),

    /// No record exists for the requested id
    #[error("Car state not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Validation(_) => 400,
            StoreError::NotFound(_) => 404,
        }
    }
}
