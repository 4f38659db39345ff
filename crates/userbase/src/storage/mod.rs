//! Storage backend implementations.
//!
//! Concrete implementations of [`userbase_core::storage::UserRepository`].
//! The in-memory backend is always compiled; it backs the test suite and
//! serves requests when the binary is built without the `dynamodb` feature.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p userbase
//! ```
//!
//! Build with in-memory storage only:
//! ```bash
//! cargo build -p userbase --no-default-features
//! ```

mod cursor;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

pub use cursor::{decode_cursor, encode_cursor, CursorKey, KeyAttribute};

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

pub use inmemory::InMemoryRepository;

/// Name of the table's partition key attribute.
pub const PARTITION_KEY: &str = "email";
