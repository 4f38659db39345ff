//! DynamoDB repository implementation.
//!
//! Implements `UserRepository` from `userbase_core::storage` using DynamoDB.
//! Writes carry condition expressions on the partition key, so the
//! existence check and the write are one atomic request.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use userbase_core::storage::{Page, PageRequest, Result, UserRepository};
use userbase_core::user::User;

use crate::config::Config;
use crate::storage::{decode_cursor, encode_cursor};

use super::client::create_client;

use super::conversions::{
    cursor_key_to_item, item_to_cursor_key, item_to_user, user_key, user_to_item,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error, PutCondition,
};

const CONDITION_NOT_EXISTS: &str = "attribute_not_exists(email)";
const CONDITION_EXISTS: &str = "attribute_exists(email)";

/// DynamoDB-based repository implementation.
///
/// The SDK client is cheap to clone and safe to share between concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a repository from configuration, building the SDK client.
    pub async fn from_config(config: &Config) -> Self {
        Self::new(create_client(config).await, config.table_name.clone())
    }

    async fn put_user(&self, user: &User, condition: PutCondition) -> Result<User> {
        let expression = match condition {
            PutCondition::MustNotExist => CONDITION_NOT_EXISTS,
            PutCondition::MustExist => CONDITION_EXISTS,
        };

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(user_to_item(user)))
            .condition_expression(expression)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, condition, &user.email))?;

        Ok(user.clone())
    }
}

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn get_user(&self, email: &str) -> Result<Option<User>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(user_key(email)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_user(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_users(&self, request: &PageRequest) -> Result<Page<User>> {
        let start_key = request
            .cursor
            .as_deref()
            .map(decode_cursor)
            .transpose()?
            .map(cursor_key_to_item);

        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(request.limit)
            .set_exclusive_start_key(start_key)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_user)
            .collect::<Result<Vec<_>>>()?;

        let next_cursor = match result.last_evaluated_key {
            Some(key) if !key.is_empty() => Some(encode_cursor(&item_to_cursor_key(&key)?)?),
            _ => None,
        };

        Ok(Page { items, next_cursor })
    }

    async fn create_user(&self, user: &User) -> Result<User> {
        let created = self.put_user(user, PutCondition::MustNotExist).await?;
        tracing::debug!(email = %user.email, table = %self.table_name, "Put new user item");
        Ok(created)
    }

    async fn update_user(&self, user: &User) -> Result<User> {
        let updated = self.put_user(user, PutCondition::MustExist).await?;
        tracing::debug!(email = %user.email, table = %self.table_name, "Replaced user item");
        Ok(updated)
    }

    async fn delete_user(&self, email: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(user_key(email)))
            .condition_expression(CONDITION_EXISTS)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, email))?;

        Ok(())
    }
}
