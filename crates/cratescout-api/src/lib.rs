// HTTP boundary - fetching raw manifest content from the hosting provider
pub mod raw;

pub use raw::{first_success, FetchError, RawContentClient};
