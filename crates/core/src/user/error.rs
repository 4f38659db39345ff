use thiserror::Error;

/// Reasons a user record fails validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UserError {
    #[error("email is required")]
    EmailRequired,
    #[error("invalid email format")]
    InvalidEmail,
    #[error("first name is required")]
    FirstNameRequired,
    #[error("last name is required")]
    LastNameRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_display() {
        assert_eq!(UserError::EmailRequired.to_string(), "email is required");
        assert_eq!(UserError::InvalidEmail.to_string(), "invalid email format");
        assert_eq!(
            UserError::FirstNameRequired.to_string(),
            "first name is required"
        );
        assert_eq!(
            UserError::LastNameRequired.to_string(),
            "last name is required"
        );
    }
}
