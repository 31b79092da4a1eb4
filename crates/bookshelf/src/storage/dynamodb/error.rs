//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `bookshelf_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use bookshelf_core::storage::RepositoryError;

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(err) = connection_failure(&err) {
        return err;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => table_not_found(),
        ScanError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        ScanError::RequestLimitExceeded(_) => request_limit_exceeded(),
        ScanError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(err) = connection_failure(&err) {
        return err;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => table_not_found(),
        GetItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        GetItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        GetItemError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(err) = connection_failure(&err) {
        return err;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => table_not_found(),
        PutItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        PutItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => transaction_conflict(),
        PutItemError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
///
/// Updates are conditioned on the item existing, so a failed condition means
/// the book is missing.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(err) = connection_failure(&err) {
        return err;
    }
    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(_) => RepositoryError::NotFound {
            entity_type: "Book",
            id: id.into(),
        },
        UpdateItemError::ResourceNotFoundException(_) => table_not_found(),
        UpdateItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        UpdateItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        UpdateItemError::TransactionConflictException(_) => transaction_conflict(),
        UpdateItemError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a generic connection/config error to RepositoryError.
pub fn map_connection_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}

/// Requests that never got a response from DynamoDB.
fn connection_failure<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    matches!(err, SdkError::DispatchFailure(_) | SdkError::TimeoutError(_))
        .then(|| map_connection_error(err))
}

fn table_not_found() -> RepositoryError {
    RepositoryError::QueryFailed("Table not found".to_string())
}

fn throughput_exceeded() -> RepositoryError {
    RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
}

fn request_limit_exceeded() -> RepositoryError {
    RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
}

fn transaction_conflict() -> RepositoryError {
    RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
}

fn internal_server_error() -> RepositoryError {
    RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_connection_error() {
        assert_eq!(
            map_connection_error("dispatch failure"),
            RepositoryError::ConnectionFailed("dispatch failure".to_string())
        );
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(table_not_found().to_string(), "Query failed: Table not found");
        assert_eq!(
            internal_server_error().to_string(),
            "Query failed: DynamoDB internal server error"
        );
    }
}
