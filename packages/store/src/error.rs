//! Error types for validation, directory mutations and storage backends.

use crate::models::{UserField, UserId};

/// A draft field failed validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyField { field: UserField },
    #[error("Please enter a valid email address")]
    InvalidFormat,
}

/// A directory mutation was rejected. The collection is left unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Email already exists!")]
    DuplicateEmail,
    #[error("User {0} no longer exists")]
    NotFound(UserId),
    #[error("No user ids left to allocate")]
    IdsExhausted,
}

/// A key/value backend could not complete an operation.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("storage lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
