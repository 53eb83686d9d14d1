// src/fetch/http.rs
use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;

use super::{ContentSource, FetchError};
use crate::config::CmsConfig;

/// Live Strapi source over reqwest. One GET per call, no retry, transport-default timeouts.
pub struct HttpSource {
    config: CmsConfig,
    client: Client,
}

impl HttpSource {
    pub fn new(config: CmsConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(CmsConfig::from_env())
    }

    /// Reuse a caller-owned client (connection pool shared with the host app).
    pub fn with_client(config: CmsConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    fn default_headers() -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        h
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError> {
        let url = self.config.url_for(endpoint);
        let t0 = std::time::Instant::now();
        counter!("cms_fetch_total").increment(1);

        let resp = self
            .client
            .get(&url)
            .headers(Self::default_headers())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = ?e, %url, "cms http error");
                FetchError::Transport(e.to_string())
            })?;

        let status = resp.status();
        histogram!("cms_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);

        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        resp.json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "strapi-http"
    }
}
