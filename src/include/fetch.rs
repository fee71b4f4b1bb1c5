//! Remote retrieval of included sources.
//!
//! The include parser talks to remote targets only through the
//! [`RemoteFetcher`] trait, which keeps the network edge swappable and
//! mockable. The default implementation performs a blocking HTTPS GET
//! and returns the full response body as text.

use thiserror::Error;

use crate::config::FetchConfig;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

/// Blocking retrieval of a remote DSL source.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteFetcher {
    /// Fetches `url` and returns the full response body as text.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`RemoteFetcher`] over a blocking reqwest client.
///
/// Each fetch opens a fresh connection; responses are not cached and no
/// timeout is applied.
#[derive(Debug, Clone, Default)]
pub struct HttpsFetcher {
    config: FetchConfig,
}

impl HttpsFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

impl RemoteFetcher for HttpsFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(self.config.user_agent.clone())
            .build()?;
        let response = client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text()?)
    }
}
