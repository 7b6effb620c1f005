use std::time::Duration;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::error::TrackerError;

/// One upstream reply, undigested: status code plus parsed JSON body.
#[derive(Debug)]
pub struct Upstream {
    pub status: StatusCode,
    pub body: Value,
}

#[derive(Clone)]
pub struct HenrikClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
}

impl HenrikClient {
    pub fn new(config: &Config) -> Result<Self, TrackerError> {
        Self::with_base_url(
            &config.henrik_base_url,
            &config.henrik_api_key,
            config.upstream_timeout_secs,
        )
    }

    /// Build against an explicit base URL. Tests point this at a mock server.
    pub fn with_base_url(
        base_url: &str,
        api_key: &str,
        timeout_secs: u64,
    ) -> Result<Self, TrackerError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub(crate) fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.api_key.parse().unwrap());
        headers
    }

    /// Forward a GET and hand back whatever came over the wire, uninterpreted.
    /// A 429 short-circuits before the body is touched, whatever it contains.
    pub(crate) async fn relay_get(&self, url: &str) -> Result<Upstream, TrackerError> {
        let resp = self.http.get(url).headers(self.auth_headers()).send().await?;
        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TrackerError::RateLimited);
        }
        let body: Value = resp.json().await?;
        Ok(Upstream { status, body })
    }
}
