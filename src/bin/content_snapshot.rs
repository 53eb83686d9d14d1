//! Loads every site section once and prints the normalized content as JSON.
//! Handy for checking what the site would render against a given CMS.

use anyhow::Context;
use portfolio_cms::{load_site, CmsConfig, ContentLoader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    portfolio_cms::logging::init();

    let cfg = CmsConfig::load_default().context("resolving cms config")?;
    tracing::info!(base_url = %cfg.base_url, "loading site content");

    let loader = ContentLoader::from_config(cfg);
    let site = load_site(&loader).await;

    for (section, status) in [
        ("global-setting", &site.global.status),
        ("hero", &site.hero.status),
        ("about", &site.about.status),
        ("projects", &site.projects.status),
        ("articles", &site.articles.status),
    ] {
        tracing::info!(section, ?status, "section loaded");
    }

    let out = serde_json::to_string_pretty(&site).context("serializing site content")?;
    println!("{out}");
    Ok(())
}
