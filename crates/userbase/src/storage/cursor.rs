//! Pagination cursor encoding.
//!
//! A cursor is the store's last evaluated key rendered as DynamoDB JSON,
//! e.g. `{"email":{"S":"a@b.com"}}`. Clients treat it as opaque and hand it
//! back unchanged to get the next page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use userbase_core::storage::{RepositoryError, Result};

/// A key attribute value, in DynamoDB's typed JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAttribute {
    S(String),
    N(String),
}

impl KeyAttribute {
    pub fn as_s(&self) -> Option<&str> {
        match self {
            KeyAttribute::S(s) => Some(s),
            KeyAttribute::N(_) => None,
        }
    }
}

/// Decoded continuation state: attribute name to key value.
pub type CursorKey = BTreeMap<String, KeyAttribute>;

/// Serializes a last evaluated key into an opaque cursor string.
pub fn encode_cursor(key: &CursorKey) -> Result<String> {
    serde_json::to_string(key).map_err(|e| {
        RepositoryError::InvalidData(format!("could not marshal LastEvaluatedKey: {e}"))
    })
}

/// Parses a cursor string produced by [`encode_cursor`].
///
/// Anything that is not a non-empty JSON object of typed key attributes is
/// rejected as [`RepositoryError::InvalidCursor`].
pub fn decode_cursor(cursor: &str) -> Result<CursorKey> {
    let key: CursorKey = serde_json::from_str(cursor).map_err(|e| {
        tracing::warn!(error = %e, "Invalid lastEvaluatedKey JSON");
        RepositoryError::InvalidCursor(e.to_string())
    })?;

    if key.is_empty() {
        return Err(RepositoryError::InvalidCursor(
            "cursor has no key attributes".to_string(),
        ));
    }

    Ok(key)
}
