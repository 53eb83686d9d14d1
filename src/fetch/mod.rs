// src/fetch/mod.rs
pub mod fixture;
pub mod http;

pub use fixture::FixtureSource;
pub use http::HttpSource;

use serde_json::Value;

/// Why a CMS request produced no JSON body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No response at all (DNS, refused connection, reset).
    #[error("transport error: {0}")]
    Transport(String),
    /// Server answered, but not with 2xx.
    #[error("API error: {code} {reason}")]
    Status { code: u16, reason: String },
    /// 2xx answer whose body is not JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// 403/404: the collection exists in the CMS but permissions or content
    /// have not been configured yet.
    pub fn is_pre_provisioning(&self) -> bool {
        matches!(self, FetchError::Status { code: 403 | 404, .. })
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// Something that can answer `GET {endpoint}` with the CMS JSON body.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError>;
    fn name(&self) -> &'static str;
}
