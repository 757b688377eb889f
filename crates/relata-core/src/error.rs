//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures. The validated constructors are
/// the only producers; everything else fails at the store level.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Store-level errors.
///
/// A referenced id with no matching row is NOT an error (resolution omits
/// it); `Data` covers stored values that fail to decode, e.g. a `post_ids`
/// column that is not a JSON array of integers.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Stored value was malformed: {0}")]
    Data(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
