//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Errors raised by the follow-edge store.
///
/// `Conflict` and `NotFound` are domain outcomes (the edge was already there,
/// or never was); `Storage` is a real fault and is the only variant callers
/// should propagate.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Follow edge already exists")]
    Conflict,

    #[error("Follow edge not found")]
    NotFound,

    #[error("Invalid follow edge: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Storage(#[from] RepoError),
}
