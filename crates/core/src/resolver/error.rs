use thiserror::Error;

use crate::book::BookError;
use crate::storage::RepositoryError;

/// Why a resolver produced no value.
///
/// The wire contract collapses every variant into `null`. Keeping them apart
/// in-process lets the dispatcher log what actually happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("{0} was not specified")]
    Misconfigured(&'static str),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("No resolver for field: {0}")]
    UnexpectedField(String),
    #[error("Book not found: {id}")]
    NotFound { id: String },
    #[error("Store error: {0}")]
    Store(#[source] RepositoryError),
}

impl ResolverError {
    /// Stable name of the variant, used as a log field.
    pub fn error_type(&self) -> &'static str {
        match self {
            ResolverError::Misconfigured(_) => "Misconfigured",
            ResolverError::InvalidArguments(_) => "InvalidArguments",
            ResolverError::UnexpectedField(_) => "UnexpectedField",
            ResolverError::NotFound { .. } => "NotFound",
            ResolverError::Store(_) => "StoreFault",
        }
    }

    /// True for failures caused by the request rather than the deployment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ResolverError::InvalidArguments(_) | ResolverError::NotFound { .. }
        )
    }
}

impl From<RepositoryError> for ResolverError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id, .. } => ResolverError::NotFound { id },
            err => ResolverError::Store(err),
        }
    }
}

impl From<BookError> for ResolverError {
    fn from(err: BookError) -> Self {
        ResolverError::InvalidArguments(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misconfigured_display() {
        assert_eq!(
            ResolverError::Misconfigured("BOOKS_TABLE").to_string(),
            "BOOKS_TABLE was not specified"
        );
    }

    #[test]
    fn test_repository_not_found_becomes_not_found() {
        let err = ResolverError::from(RepositoryError::NotFound {
            entity_type: "Book",
            id: "42".to_string(),
        });
        assert_eq!(err, ResolverError::NotFound { id: "42".to_string() });
        assert_eq!(err.error_type(), "NotFound");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_other_repository_errors_are_store_faults() {
        let err = ResolverError::from(RepositoryError::QueryFailed("boom".to_string()));
        assert!(matches!(err, ResolverError::Store(RepositoryError::QueryFailed(_))));
        assert_eq!(err.error_type(), "StoreFault");
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "Store error: Query failed: boom");
    }

    #[test]
    fn test_book_error_becomes_invalid_arguments() {
        let err = ResolverError::from(BookError::EmptyId);
        assert_eq!(
            err,
            ResolverError::InvalidArguments("Book id cannot be empty".to_string())
        );
    }
}
