// src/sections/about.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::loader::{Normalize, Section};
use crate::normalize::{MediaResolver, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub content: String,
    pub skills: Vec<String>,
    /// Resolved URL, `None` when no tools image was uploaded.
    pub tools_image: Option<String>,
}

impl Normalize for About {
    fn from_data(data: &Value, media: &MediaResolver) -> Option<Self> {
        let r = Record::from_item(data)?;
        Some(Self {
            title: r.text_or("title", ""),
            content: r.text_or("content", ""),
            skills: r.names("skills"),
            tools_image: r.media("toolsImage").map(|u| media.resolve(Some(u), None)),
        })
    }
}

impl Section for About {
    const COLLECTION: &'static str = "about";

    fn fallback() -> Self {
        Self {
            title: "About Me".to_string(),
            content: "Great design isn't just a pretty interface—it helps people reach their goals naturally, fuels sustainable growth, and keeps systems solid as you scale. I connect design and development, bringing strategy, usability, and execution together to turn visuals into real, measurable results.".to_string(),
            skills: vec![
                "Product Design".to_string(),
                "Website Design".to_string(),
                "React Development".to_string(),
            ],
            tools_image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsConfig;
    use serde_json::json;

    #[test]
    fn flat_about_with_flat_skills() {
        let media = MediaResolver::new(&CmsConfig::new("http://cms.local"));
        let data = json!({
            "id": 3,
            "title": "Who I am",
            "content": "Line one.\nLine two.",
            "skills": [{ "id": 1, "name": "Rust" }],
            "toolsImage": { "url": "https://cdn.example/tools.png" }
        });
        let about = About::from_data(&data, &media).unwrap();
        assert_eq!(about.title, "Who I am");
        assert_eq!(about.skills, vec!["Rust"]);
        assert_eq!(about.tools_image.as_deref(), Some("https://cdn.example/tools.png"));
    }

    #[test]
    fn missing_skills_is_empty_not_fallback() {
        // all-remote or all-fallback: no field-level blending of relation lists
        let media = MediaResolver::new(&CmsConfig::default());
        let about = About::from_data(&json!({ "id": 3, "title": "T" }), &media).unwrap();
        assert!(about.skills.is_empty());
        assert_eq!(about.tools_image, None);
    }

    #[test]
    fn fallback_copy_matches_site_text() {
        let fb = About::fallback();
        assert_eq!(fb.title, "About Me");
        assert!(fb
            .content
            .starts_with("Great design isn't just a pretty interface—it helps people reach"));
        assert_eq!(fb.skills.len(), 3);
    }
}
