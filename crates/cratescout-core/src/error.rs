use std::path::PathBuf;
use thiserror::Error;

/// All the ways a run can fail before we ever touch the network
///
/// We use thiserror here because it generates the boilerplate for us.
/// Life's too short to manually implement Display and Error traits.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported repository host: {0} (only https://github.com/ repositories are supported)")]
    UnsupportedHost(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
