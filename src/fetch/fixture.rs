// src/fetch/fixture.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use super::{ContentSource, FetchError};

/// Canned CMS answers keyed by endpoint. Endpoints without an entry behave
/// like an unreachable host.
#[derive(Default)]
pub struct FixtureSource {
    responses: HashMap<String, Result<Value, FetchError>>,
    calls: AtomicUsize,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, endpoint: &str, body: Value) -> Self {
        self.responses.insert(endpoint.to_string(), Ok(body));
        self
    }

    /// Raw body text; anything that is not valid JSON turns into a decode error.
    pub fn with_body_str(mut self, endpoint: &str, body: &str) -> Self {
        let parsed = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()));
        self.responses.insert(endpoint.to_string(), parsed);
        self
    }

    pub fn with_status(mut self, endpoint: &str, code: u16, reason: &str) -> Self {
        self.responses.insert(
            endpoint.to_string(),
            Err(FetchError::Status {
                code,
                reason: reason.to_string(),
            }),
        );
        self
    }

    pub fn with_error(mut self, endpoint: &str, err: FetchError) -> Self {
        self.responses.insert(endpoint.to_string(), Err(err));
        self
    }

    /// Number of `fetch_json` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ContentSource for FixtureSource {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match self.responses.get(endpoint) {
            Some(r) => r.clone(),
            None => Err(FetchError::Transport(format!(
                "no fixture registered for {endpoint}"
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
