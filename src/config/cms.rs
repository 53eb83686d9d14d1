// src/config/cms.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// --- env names & defaults ---
pub const ENV_API_URL: &str = "STRAPI_API_URL";
pub const ENV_DEFAULT_IMAGE: &str = "CMS_DEFAULT_IMAGE";
pub const ENV_CONFIG_PATH: &str = "CMS_CONFIG_PATH";

pub const DEFAULT_API_URL: &str = "http://localhost:1337";
pub const DEFAULT_IMAGE: &str = "/assets/home/gradientshub.jpg";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

/// Where the CMS lives and what to show when a media relation is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Origin of the Strapi instance, without trailing slash.
    #[serde(default = "default_api_url")]
    pub base_url: String,
    /// Site-relative asset used when a record carries no image at all.
    #[serde(default = "default_image")]
    pub default_image: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            default_image: default_image(),
        }
    }
}

impl CmsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
        .sanitized()
    }

    /// Build from `STRAPI_API_URL` / `CMS_DEFAULT_IMAGE`. Blank values count as unset.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(url) = non_blank_env(ENV_API_URL) {
            cfg.base_url = url;
        }
        if let Some(img) = non_blank_env(ENV_DEFAULT_IMAGE) {
            cfg.default_image = img;
        }
        cfg.sanitized()
    }

    /// Load from an explicit path. Supports TOML or JSON formats.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading cms config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        parse_config(&content, ext.as_str())
    }

    /// Resolve config using env var + fallbacks:
    /// 1) $CMS_CONFIG_PATH
    /// 2) config/cms.toml
    /// 3) config/cms.json
    /// 4) environment only (`from_env`)
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from_file(&pb);
            }
            return Err(anyhow!("CMS_CONFIG_PATH points to non-existent path"));
        }
        let toml_p = PathBuf::from("config/cms.toml");
        if toml_p.exists() {
            return Self::load_from_file(&toml_p);
        }
        let json_p = PathBuf::from("config/cms.json");
        if json_p.exists() {
            return Self::load_from_file(&json_p);
        }
        Ok(Self::from_env())
    }

    /// Full URL for an endpoint such as `/api/hero?populate=*`.
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    fn sanitized(mut self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            default_api_url()
        } else {
            trimmed.to_string()
        };
        if self.default_image.trim().is_empty() {
            self.default_image = default_image();
        }
        self
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<CmsConfig> {
    let parsed = match hint_ext {
        "toml" => toml::from_str::<CmsConfig>(s).map_err(anyhow::Error::from),
        "json" => serde_json::from_str::<CmsConfig>(s).map_err(anyhow::Error::from),
        // Unknown extension: JSON first, TOML second.
        _ => serde_json::from_str::<CmsConfig>(s)
            .map_err(anyhow::Error::from)
            .or_else(|_| toml::from_str::<CmsConfig>(s).map_err(anyhow::Error::from)),
    };
    parsed
        .map(CmsConfig::sanitized)
        .map_err(|e| anyhow!("unsupported cms config format: {e}"))
}
