//! Application state.
//!
//! Built once in the composition root and cloned into each request. The
//! storage client behind the repository is shared by all requests.

use std::sync::Arc;

use userbase_core::storage::UserRepository;

use crate::handlers::UserHandler;
use crate::storage::InMemoryRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Handler for the user endpoint.
    pub users: UserHandler,
}

impl AppState {
    /// Creates state over the given repository.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            users: UserHandler::new(repo),
        }
    }

    /// Creates state over an empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
