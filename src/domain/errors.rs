// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object rejected its input, or a referenced category/tag does not exist.
    #[error("validation error: {0}")]
    Validation(String),
    /// A slug, username or email is already taken.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The store failed or returned a row that no longer satisfies the invariants.
    #[error("persistence error: {0}")]
    Persistence(String),
}
