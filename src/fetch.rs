use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::FetchError;

/// Thin wrapper around a shared HTTP client for the single collection request.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Issue one GET against `url` and parse the body as JSON.
    ///
    /// No custom headers, no timeout, no retry. Any status >= 400 is a
    /// failure; the body is not read in that case.
    pub async fn fetch(&self, url: &Url) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(FetchError::Http { status });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        serde_json::from_slice(&body).map_err(FetchError::Malformed)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
