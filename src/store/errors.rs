//! # Store Errors
//!
//! Fault taxonomy for the document-store collaborator.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the requested id
    #[error("Calculation not found")]
    NotFound,

    /// Identifier has the wrong shape for the store's id type
    #[error("Malformed record id: {0}")]
    MalformedId(String),

    /// The store cannot be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Connection string scheme not supported by any backend
    #[error("Unsupported store url: {0}")]
    UnsupportedScheme(String),
}

impl StoreError {
    /// True for faults that should surface as a 500 rather than a CRUD miss
    pub fn is_fault(&self) -> bool {
        !matches!(self, StoreError::NotFound)
    }
}
