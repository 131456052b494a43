//! Domain Errors
//!
//! Error types for domain operations and the store boundary.

use thiserror::Error;

/// Every way a Team operation can be rejected.
///
/// The display strings are returned verbatim to HTTP clients, except for
/// `Internal` whose cause is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("Missing parameters")]
    MissingParameters,

    #[error("Wrong type of parameters")]
    WrongType,

    #[error("Championships won must be a positive number")]
    NegativeChampionships,

    #[error("Name must be between 3 and 20 characters")]
    InvalidNameLength,

    #[error("Base must be between 3 and 20 characters")]
    InvalidBaseLength,

    #[error("Name and base must be different")]
    NameEqualsBase,

    #[error("This team already exists")]
    DuplicateTeam,

    #[error("Team not found")]
    NotFound,

    #[error("Internal server error")]
    Internal { cause: String },
}

impl TeamError {
    pub fn internal<T: ToString>(cause: T) -> Self {
        Self::Internal {
            cause: cause.to_string(),
        }
    }

    /// Validation-category rejections: local, synchronous, not retryable
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::NotFound | Self::Internal { .. })
    }
}

/// Failures reported by a [`crate::TeamRepository`].
///
/// Absence is not an error; repositories report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store's unique-name constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("Store failure: {0}")]
    Backend(String),
}

impl From<StoreError> for TeamError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => TeamError::DuplicateTeam,
            StoreError::Backend(cause) => TeamError::Internal { cause },
        }
    }
}
