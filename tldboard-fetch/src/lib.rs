pub mod error;
pub mod fetcher;
pub mod source;

pub use error::FetchError;
pub use fetcher::fetch_users;
pub use source::{AnySource, FileSource, HttpSource, USERS_ENDPOINT, UserSource};
