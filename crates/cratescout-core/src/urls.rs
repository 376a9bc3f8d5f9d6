// Candidate URL derivation for raw manifest content
//
// GitHub serves file contents from raw.githubusercontent.com. Release tags
// in the wild are split between plain (1.2.3) and v-prefixed (v1.2.3)
// naming, so we guess both spellings and let the fetcher try them in order.

use crate::{Error, Result};

const GITHUB_PREFIX: &str = "https://github.com/";
const RAW_CONTENT_HOST: &str = "raw.githubusercontent.com";
const MANIFEST_FILE: &str = "Cargo.toml";

/// Derive the ordered list of raw manifest URLs to try for a tagged release.
///
/// The plain tag comes first, the `v`-prefixed tag second. Pure function:
/// no network access, deterministic output. Only the host segment is
/// rewritten; the rest of the URL passes through untouched.
pub fn candidate_manifest_urls(repo_url: &str, version: &str) -> Result<Vec<String>> {
    if !repo_url.starts_with(GITHUB_PREFIX) {
        return Err(Error::UnsupportedHost(repo_url.to_string()));
    }

    let raw_base = repo_url.replacen("github.com", RAW_CONTENT_HOST, 1);
    Ok(vec![
        format!("{}/{}/{}", raw_base, version, MANIFEST_FILE),
        format!("{}/v{}/{}", raw_base, version, MANIFEST_FILE),
    ])
}
