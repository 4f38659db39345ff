mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{ErrorKind, RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::UserRepository;
pub use types::{parse_limit, Page, PageRequest, DEFAULT_PAGE_LIMIT};
