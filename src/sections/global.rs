// src/sections/global.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::loader::{Normalize, Section};
use crate::normalize::{MediaResolver, Record};

/// Site-wide settings (`global-setting` single type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSetting {
    pub site_name: String,
    pub site_description: String,
    pub contact_email: Option<String>,
}

impl Normalize for GlobalSetting {
    fn from_data(data: &Value, _media: &MediaResolver) -> Option<Self> {
        let r = Record::from_item(data)?;
        Some(Self {
            site_name: r.text_or("siteName", ""),
            site_description: r.text_or("siteDescription", ""),
            contact_email: r.text("contactEmail").map(str::to_string),
        })
    }

    fn placeholder(note: &str, fallback: Self) -> Self {
        Self {
            site_description: note.to_string(),
            ..fallback
        }
    }
}

impl Section for GlobalSetting {
    const COLLECTION: &'static str = "global-setting";

    fn fallback() -> Self {
        Self {
            site_name: "Ricoui".to_string(),
            site_description: "Web/UI designer blending design and code.".to_string(),
            contact_email: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsConfig;
    use serde_json::json;

    #[test]
    fn missing_fields_are_blank_not_fallback() {
        let media = MediaResolver::new(&CmsConfig::default());
        let g = GlobalSetting::from_data(
            &json!({ "id": 1, "attributes": { "siteName": "Studio", "contactEmail": "" } }),
            &media,
        )
        .unwrap();
        assert_eq!(g.site_name, "Studio");
        assert_eq!(g.site_description, "");
        assert_eq!(g.contact_email, None);
    }

    #[test]
    fn placeholder_carries_the_note() {
        let p = GlobalSetting::placeholder("permissions pending", GlobalSetting::fallback());
        assert_eq!(p.site_description, "permissions pending");
        assert_eq!(p.site_name, "Ricoui");
    }
}
