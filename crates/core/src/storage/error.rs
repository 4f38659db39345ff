use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Display strings are human-readable detail only. Callers that need to
/// branch on the failure use [`RepositoryError::kind`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("user does not exist")]
    NotFound { email: String },
    #[error("user already exists")]
    AlreadyExists { email: String },
    #[error("failed to fetch record from DynamoDB: {0}")]
    Fetch(String),
    #[error("could not scan items from DynamoDB: {0}")]
    Scan(String),
    #[error("invalid last evaluated key for pagination")]
    InvalidCursor(String),
    #[error("could not put item into DynamoDB: {0}")]
    Write(String),
    #[error("could not delete item: {0}")]
    Delete(String),
    #[error("failed to unmarshal record: {0}")]
    InvalidData(String),
}

/// Stable discriminator for [`RepositoryError`], decoupled from its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    Fetch,
    Scan,
    InvalidCursor,
    Write,
    Delete,
    InvalidData,
}

impl ErrorKind {
    /// Snake-case tag suitable for logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::Fetch => "fetch",
            ErrorKind::Scan => "scan",
            ErrorKind::InvalidCursor => "invalid_cursor",
            ErrorKind::Write => "write",
            ErrorKind::Delete => "delete",
            ErrorKind::InvalidData => "invalid_data",
        }
    }

    /// True for failures of the store itself (network, throttling, permissions).
    pub fn is_transport(self) -> bool {
        matches!(
            self,
            ErrorKind::Fetch | ErrorKind::Scan | ErrorKind::Write | ErrorKind::Delete
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RepositoryError {
    /// Returns the error's kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::NotFound { .. } => ErrorKind::NotFound,
            RepositoryError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            RepositoryError::Fetch(_) => ErrorKind::Fetch,
            RepositoryError::Scan(_) => ErrorKind::Scan,
            RepositoryError::InvalidCursor(_) => ErrorKind::InvalidCursor,
            RepositoryError::Write(_) => ErrorKind::Write,
            RepositoryError::Delete(_) => ErrorKind::Delete,
            RepositoryError::InvalidData(_) => ErrorKind::InvalidData,
        }
    }

    pub fn not_found(email: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            email: email.into(),
        }
    }

    pub fn already_exists(email: impl Into<String>) -> Self {
        RepositoryError::AlreadyExists {
            email: email.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = RepositoryError::not_found("a@b.com");
        assert_eq!(error.to_string(), "user does not exist");
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_already_exists_display() {
        let error = RepositoryError::already_exists("a@b.com");
        assert_eq!(error.to_string(), "user already exists");
        assert_eq!(error.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_fetch_display() {
        let error = RepositoryError::Fetch("throughput exceeded".to_string());
        assert_eq!(
            error.to_string(),
            "failed to fetch record from DynamoDB: throughput exceeded"
        );
    }

    #[test]
    fn test_invalid_cursor_display_hides_detail() {
        let error = RepositoryError::InvalidCursor("expected value at line 1".to_string());
        assert_eq!(
            error.to_string(),
            "invalid last evaluated key for pagination"
        );
        assert_eq!(error.kind(), ErrorKind::InvalidCursor);
    }

    #[test]
    fn test_write_and_delete_display() {
        assert_eq!(
            RepositoryError::Write("timeout".to_string()).to_string(),
            "could not put item into DynamoDB: timeout"
        );
        assert_eq!(
            RepositoryError::Delete("timeout".to_string()).to_string(),
            "could not delete item: timeout"
        );
    }

    #[test]
    fn test_kind_tags_are_stable() {
        assert_eq!(ErrorKind::NotFound.as_str(), "not_found");
        assert_eq!(ErrorKind::AlreadyExists.as_str(), "already_exists");
        assert_eq!(ErrorKind::InvalidCursor.to_string(), "invalid_cursor");
        assert_eq!(ErrorKind::InvalidData.as_str(), "invalid_data");
    }

    #[test]
    fn test_transport_kinds() {
        assert!(ErrorKind::Fetch.is_transport());
        assert!(ErrorKind::Scan.is_transport());
        assert!(ErrorKind::Write.is_transport());
        assert!(ErrorKind::Delete.is_transport());
        assert!(!ErrorKind::NotFound.is_transport());
        assert!(!ErrorKind::AlreadyExists.is_transport());
        assert!(!ErrorKind::InvalidCursor.is_transport());
    }
}
