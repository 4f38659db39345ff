use async_trait::async_trait;

use crate::user::User;

use super::{Page, PageRequest, Result};

/// Repository for user records, keyed by email.
///
/// Implementations must be safe to share across concurrent requests.
/// Validation happens before these calls; implementations store what they
/// are given.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by email. A missing record is `Ok(None)`, not an error.
    async fn get_user(&self, email: &str) -> Result<Option<User>>;

    /// Scans one page of users.
    ///
    /// No ordering is promised across pages if the data changes between calls.
    async fn list_users(&self, request: &PageRequest) -> Result<Page<User>>;

    /// Creates a user. Fails with `AlreadyExists` if the email is taken.
    async fn create_user(&self, user: &User) -> Result<User>;

    /// Replaces all fields of an existing user. Fails with `NotFound` if absent.
    async fn update_user(&self, user: &User) -> Result<User>;

    /// Deletes a user by email. Fails with `NotFound` if absent.
    async fn delete_user(&self, email: &str) -> Result<()>;
}
