//! Pure validation for user records.
//!
//! Rules run in a fixed order and the first failure wins, so a record with
//! several problems always reports the same reason.

use std::sync::LazyLock;

use regex::Regex;

use super::{User, UserError};

/// Shortest accepted email address, in bytes.
pub const EMAIL_MIN_LEN: usize = 3;

/// Longest accepted email address, in bytes.
pub const EMAIL_MAX_LEN: usize = 254;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("static email regex should compile")
});

/// Returns true if `email` is within the length bounds and matches the
/// address grammar (local part, `@`, dot-separated hostname labels).
///
/// # Examples
///
/// ```
/// use userbase_core::user::is_email_valid;
///
/// assert!(is_email_valid("a@b.com"));
/// assert!(!is_email_valid("not-an-email"));
/// assert!(!is_email_valid("a@"));
/// ```
pub fn is_email_valid(email: &str) -> bool {
    (EMAIL_MIN_LEN..=EMAIL_MAX_LEN).contains(&email.len()) && EMAIL_REGEX.is_match(email)
}

/// Validates a user record before it is written.
pub fn validate_user(user: &User) -> Result<(), UserError> {
    if user.email.is_empty() {
        return Err(UserError::EmailRequired);
    }
    if !is_email_valid(&user.email) {
        return Err(UserError::InvalidEmail);
    }
    if user.first_name.is_empty() {
        return Err(UserError::FirstNameRequired);
    }
    if user.last_name.is_empty() {
        return Err(UserError::LastNameRequired);
    }
    Ok(())
}
