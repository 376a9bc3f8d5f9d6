// Raw-content client for guessed manifest URLs
//
// Tag spelling varies between projects, so the caller hands us an ordered
// list of guesses. A 404 means "wrong guess, try the next one"; anything
// else that isn't a success aborts the whole walk.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP {status} while fetching {url}")]
    RequestFailed { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Manifest not found at any candidate URL:\n  {}", .attempted.join("\n  "))]
    NotFound { attempted: Vec<String> },
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Client for fetching raw file content over HTTPS
pub struct RawContentClient {
    client: reqwest::Client,
}

impl RawContentClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent("CrateScout/0.1.0")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// Fetch the first candidate URL that resolves.
    ///
    /// Candidates are requested strictly in order, each at most once, and
    /// the walk stops at the first success. Exhausting the list yields a
    /// not-found error that names every URL we tried.
    pub async fn fetch_manifest(&self, urls: &[String]) -> Result<String> {
        first_success(urls, |url| {
            let client = self.client.clone();
            let url = url.to_string();
            async move {
                debug!("Fetching {}", url);
                let response = client.get(&url).send().await?;

                if response.status() == reqwest::StatusCode::NOT_FOUND {
                    return Ok(None);
                }

                if !response.status().is_success() {
                    return Err(FetchError::RequestFailed {
                        status: response.status().as_u16(),
                        url,
                    });
                }

                Ok(Some(response.text().await?))
            }
        })
        .await
    }
}

impl Default for RawContentClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk candidate URLs in order, returning the first successful body.
///
/// The per-URL operation reports `Ok(None)` for "not found here", which
/// moves the walk to the next candidate. Any error stops the walk
/// immediately and nothing later in the list is attempted.
pub async fn first_success<F, Fut>(urls: &[String], mut attempt: F) -> Result<String>
where
    F: FnMut(&str) -> Fut,
    Fut: Future<Output = Result<Option<String>>>,
{
    for url in urls {
        match attempt(url).await? {
            Some(body) => {
                debug!("Fetched {} ({} bytes)", url, body.len());
                return Ok(body);
            }
            None => {
                debug!("{} returned 404, trying next candidate", url);
            }
        }
    }

    Err(FetchError::NotFound {
        attempted: urls.to_vec(),
    })
}
