// src/lib.rs
// Public library surface for the site sections, the demo binary and integration tests.

pub mod config;
pub mod fetch;
pub mod loader;
pub mod logging;
pub mod normalize;
pub mod sections;

// ---- Re-exports for stable public API ----
pub use crate::config::CmsConfig;
pub use crate::fetch::{ContentSource, FetchError, FixtureSource, HttpSource};
pub use crate::loader::{ContentLoader, LoadHandle, LoadStatus, Loaded, Normalize, Origin, Section};
pub use crate::sections::{About, Article, GlobalSetting, Hero, Project, ProjectListing};

use serde::Serialize;

/// Every section of the home page, loaded independently.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub global: Loaded<GlobalSetting>,
    pub hero: Loaded<Hero>,
    pub about: Loaded<About>,
    pub projects: Loaded<Vec<Project>>,
    pub articles: Loaded<Vec<Article>>,
}

/// Load all five collections concurrently. Each one falls back on its own;
/// a dead CMS still yields a complete page.
pub async fn load_site(loader: &ContentLoader) -> SiteContent {
    let (global, hero, about, projects, articles) = tokio::join!(
        loader.load_section::<GlobalSetting>(),
        loader.load_section::<Hero>(),
        loader.load_section::<About>(),
        loader.load_section::<Vec<Project>>(),
        loader.load_section::<Vec<Article>>(),
    );
    SiteContent {
        global,
        hero,
        about,
        projects,
        articles,
    }
}
