//! In-memory storage backend.
//!
//! Stores users in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Data is not
//! persisted and is lost when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use userbase::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
