//! Domain Layer - Errors
//!
//! Every fallible domain operation returns a `DomainResult`.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// None of these are fatal. `Validation` is shown next to the form,
/// `NotFound` is a stale reference and is usually ignored, `Storage`
/// degrades to an in-memory session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("item {0} not found")]
    NotFound(u64),
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
    #[error("no form is open")]
    NoActiveSession,
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

/// Draft rejected at the store boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("price must be a non-negative number")]
    InvalidPrice,
}

/// Failure of the persistence slot or of the payload in it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("payload in `{key}` is malformed: {reason}")]
    Malformed { key: String, reason: String },
    #[error("failed to serialize items: {0}")]
    Serialize(String),
}
