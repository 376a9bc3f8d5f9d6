use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Run settings loaded once at startup
///
/// Every key is required. A missing or mistyped key fails the run up front
/// with a message naming the key, rather than halfway through a fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub package_name: String,
    pub repository_url: String,
    pub mode: Mode,
    pub version: String,
    pub filter_substring: String,
}

/// Where the manifest should be resolved from
///
/// Only `git` drives the fetch pipeline today; `local` is accepted by the
/// config schema but short-circuits with a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Git,
    Local,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Git => write!(f, "git"),
            Mode::Local => write!(f, "local"),
        }
    }
}

impl RunConfig {
    /// Load settings from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!("Loaded run settings from {}", path.display());
        Ok(config)
    }

    /// Parse and validate settings from TOML text
    ///
    /// serde reports the first missing or mismatched key by name, which is
    /// exactly the diagnostic we want to surface.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: RunConfig = toml::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.trim_in_place();
        Ok(config)
    }

    /// Strip stray whitespace from every string-valued setting
    fn trim_in_place(&mut self) {
        for field in [
            &mut self.package_name,
            &mut self.repository_url,
            &mut self.version,
            &mut self.filter_substring,
        ] {
            *field = field.trim().to_string();
        }
    }
}
