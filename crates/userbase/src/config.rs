use std::env;

use thiserror::Error;

/// Environment variable holding the AWS region.
pub const AWS_REGION: &str = "AWS_REGION";
/// Environment variable holding the DynamoDB table name.
pub const DYNAMODB_TABLE_NAME: &str = "DYNAMODB_TABLE_NAME";
/// Environment variable holding an optional custom endpoint (local DynamoDB).
pub const AWS_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
}

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// AWS region for the DynamoDB client.
    pub region: String,
    /// Table holding user records, keyed by `email`.
    pub table_name: String,
    /// Custom endpoint URL, if any.
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_REGION` - AWS region (required)
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (required)
    /// - `AWS_ENDPOINT_URL` - Custom endpoint, e.g. local DynamoDB (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        Ok(Self {
            region: required(AWS_REGION)?,
            table_name: required(DYNAMODB_TABLE_NAME)?,
            endpoint_url: lookup(AWS_ENDPOINT_URL).filter(|value| !value.is_empty()),
        })
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({url})"),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}
