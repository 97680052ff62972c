// src/core/net.rs
//
// Page fetching. Everything upstream talks to `Fetch`, so the pipeline can
// be driven by canned HTML in tests.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::consts::HTTP_TIMEOUT_SECS;
use crate::error::{Result, ScrapeError};

pub trait Fetch {
    /// GET `url` and return the body of a `200` response.
    fn get(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher with a fixed User-Agent.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| ScrapeError::Config(format!("HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        let transport = |e: reqwest::Error| ScrapeError::Transport {
            url: s!(url),
            reason: e.to_string(),
        };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(transport)
    }
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<String> {
        (**self).get(url)
    }
}
