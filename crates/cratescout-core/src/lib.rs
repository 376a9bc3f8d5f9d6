// Core pipeline logic - run configuration, URL derivation, shared errors
pub mod config;
pub mod error;
pub mod urls;

pub use config::{Mode, RunConfig};
pub use error::Error;
pub use urls::candidate_manifest_urls;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
