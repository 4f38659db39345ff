//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use userbase_core::storage::{Page, PageRequest, RepositoryError, Result, UserRepository};
use userbase_core::user::User;

use crate::storage::{decode_cursor, encode_cursor, CursorKey, KeyAttribute, PARTITION_KEY};

/// In-memory storage backend.
///
/// Records are ordered by email, so scans are stable as long as the data
/// does not change between pages. Existence checks and writes happen under
/// the same write lock, so concurrent creates for one email cannot both
/// succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<RwLock<BTreeMap<String, User>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.email.clone(), user))
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

/// Extracts the email to resume after from a decoded cursor.
fn cursor_email(key: &CursorKey) -> Result<&str> {
    key.get(PARTITION_KEY)
        .and_then(KeyAttribute::as_s)
        .ok_or_else(|| {
            RepositoryError::InvalidCursor(format!("cursor has no string '{PARTITION_KEY}' key"))
        })
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn list_users(&self, request: &PageRequest) -> Result<Page<User>> {
        let start = match request.cursor.as_deref() {
            Some(cursor) => {
                let key = decode_cursor(cursor)?;
                Bound::Excluded(cursor_email(&key)?.to_string())
            }
            None => Bound::Unbounded,
        };

        let users = self.users.read().await;
        let limit = usize::try_from(request.limit).unwrap_or(0);
        let mut remaining = users.range((start, Bound::Unbounded)).map(|(_, user)| user);

        let items: Vec<User> = remaining.by_ref().take(limit).cloned().collect();

        let next_cursor = match (items.last(), remaining.next()) {
            (Some(last), Some(_)) => {
                let key = CursorKey::from([(
                    PARTITION_KEY.to_string(),
                    KeyAttribute::S(last.email.clone()),
                )]);
                Some(encode_cursor(&key)?)
            }
            _ => None,
        };

        Ok(Page { items, next_cursor })
    }

    async fn create_user(&self, user: &User) -> Result<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(RepositoryError::already_exists(&user.email));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user.clone())
    }

    async fn update_user(&self, user: &User) -> Result<User> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.email) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user.clone())
            }
            None => Err(RepositoryError::not_found(&user.email)),
        }
    }

    async fn delete_user(&self, email: &str) -> Result<()> {
        let mut users = self.users.write().await;
        if users.remove(email).is_none() {
            return Err(RepositoryError::not_found(email));
        }
        Ok(())
    }
}
