//! Pure function for mapping repository errors to HTTP status codes.

use super::{ErrorKind, RepositoryError};

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Only a missing key gets its own status. Every other failure, including
/// a duplicate create and store transport errors, is reported as a bad
/// request.
///
/// # Examples
///
/// ```
/// use userbase_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// assert_eq!(repository_error_to_status_code(&RepositoryError::not_found("a@b.com")), 404);
/// assert_eq!(repository_error_to_status_code(&RepositoryError::already_exists("a@b.com")), 400);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error.kind() {
        ErrorKind::NotFound => 404,
        ErrorKind::AlreadyExists
        | ErrorKind::Fetch
        | ErrorKind::Scan
        | ErrorKind::InvalidCursor
        | ErrorKind::Write
        | ErrorKind::Delete
        | ErrorKind::InvalidData => 400,
    }
}
