//! Store error model.

use thiserror::Error;

use crate::id::EntityId;

/// Result type used across stores and durable logs.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Each variant is a distinct failure kind callers are expected to branch on.
/// None of them is ever logged or printed by the component that raises it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An entity with this identifier is already stored.
    #[error("entity with id {0} already exists")]
    DuplicateKey(EntityId),

    /// No entity with this identifier is stored.
    #[error("entity with id {0} not found")]
    NotFound(EntityId),

    /// A new field value violates a domain constraint (e.g. negative quantity).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The backing resource could not be read or written.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// The backing resource does not hold valid entities.
    #[error("malformed log contents: {0}")]
    Format(String),
}

impl StoreError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// True for failures that leave the store untouched and can be reported
    /// and skipped (the CRUD kinds), as opposed to I/O and format failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateKey(_) | Self::NotFound(_) | Self::InvalidValue(_)
        )
    }
}
