// src/core/net.rs

// One blocking HTTPS GET per run. No retries, no backoff.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Where the results page comes from. The runner only sees this trait.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Live source: the real site over HTTP(S).
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// `timeout = None` disables reqwest's default; a stalled server then hangs the run.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        logd!(url, "GET");
        let transport = |source| FetchError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        let body = resp.bytes().map_err(transport)?;
        logd!(bytes = body.len(), status = status.as_u16(), "response");
        Ok(body.to_vec())
    }
}

/// Fixed page held in memory. Handy for replaying a saved copy of the site.
pub struct StaticPage(pub Vec<u8>);

impl PageSource for StaticPage {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        Ok(self.0.clone())
    }
}
