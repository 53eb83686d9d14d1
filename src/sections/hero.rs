// src/sections/hero.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::loader::{Normalize, Section};
use crate::normalize::{MediaResolver, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub greeting: String,
    pub name: String,
    pub description: String,
    pub resume_link: String,
    pub roles: Vec<String>,
    /// Always loadable: CMS upload, CDN URL, or the default asset.
    pub profile_image: String,
}

impl Hero {
    /// "Hi, I'm Ricoui"
    pub fn headline(&self) -> String {
        format!("{} {}", self.greeting, self.name).trim().to_string()
    }
}

impl Normalize for Hero {
    fn from_data(data: &Value, media: &MediaResolver) -> Option<Self> {
        let r = Record::from_item(data)?;
        Some(Self {
            greeting: r.text_or("greeting", ""),
            name: r.text_or("name", ""),
            description: r.text_or("description", ""),
            resume_link: r.text_or("resumeLink", "#"),
            roles: r.names("roles"),
            profile_image: media.resolve(r.media("profileImage"), None),
        })
    }
}

impl Section for Hero {
    const COLLECTION: &'static str = "hero";

    fn fallback() -> Self {
        Self {
            greeting: "Hi, I'm".to_string(),
            name: "Ricoui".to_string(),
            description: "I'm a web/UI designer with 8+ years of experience. I love blending design and code to create captivating visuals and interactive experiences.".to_string(),
            resume_link: "#".to_string(),
            roles: Vec::new(),
            profile_image: crate::config::cms::DEFAULT_IMAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsConfig;
    use serde_json::json;

    #[test]
    fn strapi_v4_hero_with_relations() {
        let media = MediaResolver::new(&CmsConfig::new("http://cms.local"));
        let data = json!({
            "id": 1,
            "attributes": {
                "greeting": "Hello, I'm",
                "name": "Ada",
                "description": "Engineer.",
                "resumeLink": "https://example.com/cv.pdf",
                "roles": { "data": [
                    { "id": 1, "attributes": { "name": "Designer" } },
                    { "id": 2, "attributes": { "name": "Developer" } }
                ]},
                "profileImage": { "data": { "id": 9, "attributes": { "url": "/uploads/me.jpg" } } }
            }
        });
        let hero = Hero::from_data(&data, &media).unwrap();
        assert_eq!(hero.headline(), "Hello, I'm Ada");
        assert_eq!(hero.roles, vec!["Designer", "Developer"]);
        assert_eq!(hero.profile_image, "http://cms.local/uploads/me.jpg");
    }

    #[test]
    fn no_image_uses_default_asset() {
        let media = MediaResolver::new(&CmsConfig::default());
        let hero = Hero::from_data(&json!({ "id": 1, "name": "Ada" }), &media).unwrap();
        assert_eq!(hero.profile_image, "/assets/home/gradientshub.jpg");
        assert_eq!(hero.headline(), "Ada");
        assert_eq!(hero.resume_link, "#");
        assert!(hero.roles.is_empty());
    }
}
