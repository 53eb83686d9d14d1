// src/sections/projects.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::loader::{Normalize, Section};
use crate::normalize::{MediaResolver, Record};

pub const DEFAULT_PROJECT_IMAGE: &str = "/assets/works/01.jpg";

/// How many projects the home page shows when no limit is given.
pub const DEFAULT_VISIBLE: usize = 6;
/// Leading projects rendered full width.
pub const FEATURED_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub tags: Vec<String>,
    pub video: Option<String>,
    pub is_show: bool,
}

impl Project {
    fn from_record(r: &Record<'_>, media: &MediaResolver) -> Self {
        Self {
            name: r.text_or("title", "Untitled Project"),
            description: r.text_or("tagline", ""),
            url: r
                .text("liveUrl")
                .or_else(|| r.text("githubUrl"))
                .unwrap_or("#")
                .to_string(),
            image: media.resolve(r.media("coverImage"), Some(DEFAULT_PROJECT_IMAGE)),
            tags: r.names("techStack"),
            video: r.media("video").map(|u| media.resolve(Some(u), None)),
            is_show: r.flag("isShow").unwrap_or(true),
        }
    }

    fn sample(name: &str, description: &str, image: &str, tags: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            url: "#".to_string(),
            image: image.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            video: None,
            is_show: true,
        }
    }
}

impl Normalize for Vec<Project> {
    fn from_data(data: &Value, media: &MediaResolver) -> Option<Self> {
        let records = Record::list(data);
        if records.is_empty() {
            return None;
        }
        Some(
            records
                .iter()
                .map(|r| Project::from_record(r, media))
                .collect(),
        )
    }
}

impl Section for Vec<Project> {
    const COLLECTION: &'static str = "projects";

    fn fallback() -> Self {
        vec![
            Project::sample(
                "Design system & Application ui",
                "Building a comprehensive design system for a complex enterprise application to ensure consistency and speed up development.",
                "/assets/works/01.jpg",
                &["Design System", "UI/UX", "Figma"],
            ),
            Project::sample(
                "E-commerce Redesign",
                "Complete overhaul of an e-commerce platform focusing on conversion rate optimization and mobile-first experience.",
                "/assets/works/02.jpg",
                &["E-commerce", "Web Design"],
            ),
            Project::sample(
                "Fintech Dashboard",
                "A data-rich dashboard for a financial technology startup, organizing complex information into intuitive visualizations.",
                "/assets/works/03.jpg",
                &["Dashboard", "Fintech"],
            ),
            Project::sample(
                "Marketing Website",
                "High-converting marketing website for a SaaS startup with scroll animations and 3D elements.",
                "/assets/works/04.jpg",
                &["Web Design", "Framer Motion"],
            ),
            Project::sample(
                "Mobile App Design",
                "iOS and Android app design for a wellness startup, focusing on calm and accessible user interfaces.",
                "/assets/works/05.jpg",
                &["Mobile", "App Design"],
            ),
        ]
    }
}

/// Projects split the way the work section lays them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListing {
    pub featured: Vec<Project>,
    pub grid: Vec<Project>,
    pub show_view_all: bool,
}

impl ProjectListing {
    /// Cap at `limit` (or [`DEFAULT_VISIBLE`] unless `show_all`), then split the
    /// first [`FEATURED_COUNT`] off as featured. Hidden featured entries are dropped.
    pub fn arrange(projects: &[Project], limit: Option<usize>, show_all: bool) -> Self {
        let total = projects.len();
        let visible = match limit {
            Some(n) => n.min(total),
            None if !show_all => DEFAULT_VISIBLE.min(total),
            None => total,
        };
        let shown = &projects[..visible];
        let split = FEATURED_COUNT.min(shown.len());

        let show_view_all = match limit {
            Some(n) => n < total,
            None => !show_all && total > DEFAULT_VISIBLE,
        };

        Self {
            featured: shown[..split].iter().filter(|p| p.is_show).cloned().collect(),
            grid: shown[split..].to_vec(),
            show_view_all,
        }
    }
}
