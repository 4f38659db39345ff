//! DynamoDB storage backend implementation.
//!
//! Stores one item per user in a table whose partition key is the `email`
//! string attribute, using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod repository;

pub use client::create_client;
pub use repository::DynamoDbRepository;
