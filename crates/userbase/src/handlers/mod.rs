pub mod event;
pub mod health;
pub mod response;
pub mod users;

pub use event::{ApiRequest, ApiResponse};
pub use users::{users_endpoint, UserHandler};
