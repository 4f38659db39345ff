//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps, domain
//! types and pagination cursors. Testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use userbase_core::storage::RepositoryError;
use userbase_core::user::User;

use crate::storage::{CursorKey, KeyAttribute, PARTITION_KEY};

pub type Item = HashMap<String, AttributeValue>;

/// Build the primary key for a user.
pub fn user_key(email: &str) -> Item {
    HashMap::from([(
        PARTITION_KEY.to_string(),
        AttributeValue::S(email.to_string()),
    )])
}

/// Convert a User to a DynamoDB item.
pub fn user_to_item(user: &User) -> Item {
    HashMap::from([
        (
            PARTITION_KEY.to_string(),
            AttributeValue::S(user.email.clone()),
        ),
        (
            "firstName".to_string(),
            AttributeValue::S(user.first_name.clone()),
        ),
        (
            "lastName".to_string(),
            AttributeValue::S(user.last_name.clone()),
        ),
    ])
}

/// Convert a DynamoDB item to a User.
pub fn item_to_user(item: &Item) -> Result<User, RepositoryError> {
    Ok(User {
        email: get_string(item, PARTITION_KEY)?,
        first_name: get_string(item, "firstName")?,
        last_name: get_string(item, "lastName")?,
    })
}

/// Convert a scan's `LastEvaluatedKey` into cursor form.
pub fn item_to_cursor_key(item: &Item) -> Result<CursorKey, RepositoryError> {
    item.iter()
        .map(|(name, value)| {
            let attribute = match value {
                AttributeValue::S(s) => KeyAttribute::S(s.clone()),
                AttributeValue::N(n) => KeyAttribute::N(n.clone()),
                other => {
                    return Err(RepositoryError::InvalidData(format!(
                        "unsupported key attribute {name}: {other:?}"
                    )))
                }
            };
            Ok((name.clone(), attribute))
        })
        .collect()
}

/// Convert a decoded cursor back into an `ExclusiveStartKey`.
pub fn cursor_key_to_item(key: CursorKey) -> Item {
    key.into_iter()
        .map(|(name, attribute)| {
            let value = match attribute {
                KeyAttribute::S(s) => AttributeValue::S(s),
                KeyAttribute::N(n) => AttributeValue::N(n),
            };
            (name, value)
        })
        .collect()
}

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {key}")))
}
