//! HTTP fetcher for remote attachments.

use attview::{ContentFetcher, FetchError, FetchedContent};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

const USER_AGENT: &str = concat!("attview/", env!("CARGO_PKG_VERSION"));

/// Blocking fetcher backed by reqwest on a private tokio runtime.
pub struct HttpFetcher {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl HttpFetcher {
    /// Create a fetcher with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, Box<dyn std::error::Error>> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        let runtime = tokio::runtime::Runtime::new()?;
        Ok(Self { client, runtime })
    }
}

impl ContentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedContent, FetchError> {
        self.runtime.block_on(async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    code: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or_default().to_string(),
                });
            }

            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();

            let content = response
                .text()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            log::debug!("fetched {} ({} bytes, {:?})", url, content.len(), content_type);
            Ok(FetchedContent::new(content, content_type))
        })
    }
}
