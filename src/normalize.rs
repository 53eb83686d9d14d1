// src/normalize.rs
//! Shape-agnostic helpers over Strapi payloads.
//!
//! The same collection can come back as `{ id, attributes: {...} }` (v4) or with
//! the fields flattened onto the record (v5 / custom serializers). Relations and
//! media have the same split. Everything here accepts both and never panics on
//! unexpected JSON; missing pieces come back as `None` / empty.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::config::CmsConfig;

/// `body.data`, unless it is absent, `null`, an empty list or an empty object.
///
/// Scalars are passed through so the record builder can reject them as a shape error.
pub fn envelope_data(body: &Value) -> Option<&Value> {
    let data = body.get("data")?;
    let usable = match data {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        _ => true,
    };
    usable.then_some(data)
}

/// One CMS entry with its fields located, whichever shape it arrived in.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    id: Option<&'a Value>,
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    /// `item.attributes` when present, otherwise the item itself.
    pub fn from_item(item: &'a Value) -> Option<Self> {
        let outer = item.as_object()?;
        let fields = match outer.get("attributes") {
            Some(Value::Object(attrs)) => attrs,
            _ => outer,
        };
        Some(Self {
            id: outer.get("id"),
            fields,
        })
    }

    /// Every element of a collection payload that is an object.
    pub fn list(data: &'a Value) -> Vec<Self> {
        data.as_array()
            .map(|items| items.iter().filter_map(Record::from_item).collect())
            .unwrap_or_default()
    }

    pub fn fields(&self) -> &'a Map<String, Value> {
        self.fields
    }

    /// `id` rendered as text (numeric or string ids both occur).
    pub fn id(&self) -> Option<String> {
        match self.id? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// Non-empty string field. Empty strings count as absent.
    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or(default).to_string()
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(Value::as_bool)
    }

    /// Names out of a tag/skill relation. See [`relation_names`].
    pub fn names(&self, key: &str) -> Vec<String> {
        self.fields.get(key).map(relation_names).unwrap_or_default()
    }

    /// Raw URL of a media relation. See [`media_url`].
    pub fn media(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).and_then(media_url)
    }

    pub fn date(&self, key: &str) -> Option<DateTime<Utc>> {
        self.text(key).and_then(parse_publish_date)
    }
}

/// Resolve a tag/skill relation to its display names.
///
/// Nested `{ data: [{ attributes: { name } }] }` is checked first, then a flat
/// `[{ name }]` list (bare strings are accepted too). Anything else is empty.
pub fn relation_names(value: &Value) -> Vec<String> {
    let entries = match value.get("data") {
        Some(Value::Array(items)) => items,
        _ => match value {
            Value::Array(items) => items,
            _ => return Vec::new(),
        },
    };
    entries.iter().filter_map(entry_name).collect()
}

fn entry_name(entry: &Value) -> Option<String> {
    let name = match entry {
        Value::String(s) => Some(s.as_str()),
        Value::Object(_) => entry
            .get("attributes")
            .and_then(|a| a.get("name"))
            .or_else(|| entry.get("name"))
            .and_then(Value::as_str),
        _ => None,
    };
    name.filter(|n| !n.is_empty()).map(str::to_string)
}

/// URL embedded in a media relation: `{ url }`, `{ data: { attributes: { url } } }`
/// or `{ data: { url } }`. Multi-media relations yield their first entry.
pub fn media_url(value: &Value) -> Option<&str> {
    if let Some(url) = value.get("url").and_then(Value::as_str) {
        return Some(url).filter(|u| !u.is_empty());
    }
    let data = match value.get("data")? {
        Value::Array(items) => items.first()?,
        other => other,
    };
    data.get("attributes")
        .and_then(|a| a.get("url"))
        .or_else(|| data.get("url"))
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
}

/// Parse a publish date as RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_publish_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Turns CMS media paths into URLs the site can load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResolver {
    base_url: String,
    default_image: String,
}

impl MediaResolver {
    pub fn new(config: &CmsConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            default_image: config.default_image.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// - no URL: `default`, or the configured default asset
    /// - absolute URL (has a scheme): verbatim
    /// - otherwise: prefixed with the CMS base URL
    pub fn resolve(&self, raw: Option<&str>, default: Option<&str>) -> String {
        let Some(url) = raw.map(str::trim).filter(|u| !u.is_empty()) else {
            return default.unwrap_or(self.default_image.as_str()).to_string();
        };
        if has_scheme(url) {
            return url.to_string();
        }
        if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }
}

fn has_scheme(url: &str) -> bool {
    match url.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
