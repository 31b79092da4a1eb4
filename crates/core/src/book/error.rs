use thiserror::Error;

/// Errors that can occur when validating books or book updates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Book id cannot be empty")]
    EmptyId,
}
