//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
///
/// Lookups that may legitimately miss (slug lookup, update, delete) report
/// absence through `Option`/`bool` instead of an error variant.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Malformed import document: {0}")]
    MalformedImport(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,

    #[error("Storage failure: {0}")]
    Storage(String),
}
