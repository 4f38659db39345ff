//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `userbase_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use userbase_core::storage::RepositoryError;

/// Which precondition a `PutItem` call carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutCondition {
    /// `attribute_not_exists(email)`: the put is a create.
    MustNotExist,
    /// `attribute_exists(email)`: the put is a full replace.
    MustExist,
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    let detail = match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => "Table not found".to_string(),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded, please retry".to_string()
        }
        GetItemError::RequestLimitExceeded(_) => {
            "Request limit exceeded, please retry".to_string()
        }
        GetItemError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("GetItem failed: {err:?}"),
    };
    tracing::error!(operation = "GetItem", error = %detail, "DynamoDB request failed");
    RepositoryError::Fetch(detail)
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    let detail = match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => "Table not found".to_string(),
        ScanError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded, please retry".to_string()
        }
        ScanError::RequestLimitExceeded(_) => "Request limit exceeded, please retry".to_string(),
        ScanError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("Scan failed: {err:?}"),
    };
    tracing::error!(operation = "Scan", error = %detail, "DynamoDB request failed");
    RepositoryError::Scan(detail)
}

/// Map a PutItem SDK error to RepositoryError.
///
/// A failed condition means the key was present for a create, or absent for
/// a replace.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    condition: PutCondition,
    email: &str,
) -> RepositoryError {
    let detail = match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => {
            return match condition {
                PutCondition::MustNotExist => RepositoryError::already_exists(email),
                PutCondition::MustExist => RepositoryError::not_found(email),
            };
        }
        PutItemError::ResourceNotFoundException(_) => "Table not found".to_string(),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded, please retry".to_string()
        }
        PutItemError::RequestLimitExceeded(_) => {
            "Request limit exceeded, please retry".to_string()
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            "Item collection size limit exceeded".to_string()
        }
        PutItemError::TransactionConflictException(_) => {
            "Transaction conflict, please retry".to_string()
        }
        PutItemError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("PutItem failed: {err:?}"),
    };
    tracing::error!(operation = "PutItem", error = %detail, "DynamoDB request failed");
    RepositoryError::Write(detail)
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    email: &str,
) -> RepositoryError {
    let detail = match err.into_service_error() {
        DeleteItemError::ConditionalCheckFailedException(_) => {
            return RepositoryError::not_found(email);
        }
        DeleteItemError::ResourceNotFoundException(_) => "Table not found".to_string(),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded, please retry".to_string()
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            "Request limit exceeded, please retry".to_string()
        }
        DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            "Item collection size limit exceeded".to_string()
        }
        DeleteItemError::TransactionConflictException(_) => {
            "Transaction conflict, please retry".to_string()
        }
        DeleteItemError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("DeleteItem failed: {err:?}"),
    };
    tracing::error!(operation = "DeleteItem", error = %detail, "DynamoDB request failed");
    RepositoryError::Delete(detail)
}
