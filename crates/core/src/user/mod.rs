mod error;
mod types;
mod validation;

pub use error::UserError;
pub use types::User;
pub use validation::{is_email_valid, validate_user, EMAIL_MAX_LEN, EMAIL_MIN_LEN};
