// src/sections/articles.rs
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::loader::{Normalize, Section};
use crate::normalize::{MediaResolver, Record};

pub const DEFAULT_ARTICLE_IMAGE: &str = "/assets/blog/default.jpg";

/// Articles shown by the blog teaser when no limit is given.
pub const DEFAULT_LATEST: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub publish_date: DateTime<Utc>,
    pub img: String,
}

impl Article {
    /// Records without a usable `publishDate` are stamped with `now`, which
    /// puts them at the top of the list.
    fn from_record(r: &Record<'_>, media: &MediaResolver, now: DateTime<Utc>) -> Self {
        let slug = match (r.text("slug"), r.id()) {
            (Some(s), _) => s.to_string(),
            (None, Some(id)) => format!("article-{id}"),
            (None, None) => "article".to_string(),
        };
        Self {
            title: r.text_or("title", "Untitled Article"),
            slug,
            excerpt: r.text_or("excerpt", ""),
            publish_date: r.date("publishDate").unwrap_or(now),
            img: media.resolve(r.media("coverImage"), Some(DEFAULT_ARTICLE_IMAGE)),
        }
    }
}

/// Newest first. Stable, so equal dates keep CMS order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
}

/// The first `limit` articles (default [`DEFAULT_LATEST`]).
pub fn latest(articles: &[Article], limit: Option<usize>) -> &[Article] {
    let n = limit.unwrap_or(DEFAULT_LATEST).min(articles.len());
    &articles[..n]
}

pub(crate) fn normalize_with_clock(
    data: &Value,
    media: &MediaResolver,
    now: DateTime<Utc>,
) -> Option<Vec<Article>> {
    let records = Record::list(data);
    if records.is_empty() {
        return None;
    }
    let mut out: Vec<Article> = records
        .iter()
        .map(|r| Article::from_record(r, media, now))
        .collect();
    sort_newest_first(&mut out);
    Some(out)
}

impl Normalize for Vec<Article> {
    fn from_data(data: &Value, media: &MediaResolver) -> Option<Self> {
        normalize_with_clock(data, media, Utc::now())
    }
}

impl Section for Vec<Article> {
    const COLLECTION: &'static str = "articles";

    fn fallback() -> Self {
        let at = |y, m, d| {
            Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
                .single()
                .unwrap_or_default()
        };
        vec![
            Article {
                title: "The Future of Web Design in 2025".to_string(),
                slug: "future-of-web-design".to_string(),
                excerpt: "Exploring the upcoming trends that will shape the aesthetic and functional web experiences of the next decade.".to_string(),
                publish_date: at(2024, 10, 15),
                img: "/assets/blog/01.jpg".to_string(),
            },
            Article {
                title: "Mastering Framer Motion for React Developers".to_string(),
                slug: "mastering-framer-motion".to_string(),
                excerpt: "A comprehensive guide to adding delightful micro-interactions and complex animations to your React stack.".to_string(),
                publish_date: at(2024, 9, 22),
                img: "/assets/blog/02.jpg".to_string(),
            },
            Article {
                title: "Why Minimalist UI is Here to Stay".to_string(),
                slug: "minimalist-ui".to_string(),
                excerpt: "Analyzing the psychological impact of clean, uncluttered interfaces and how to achieve them effectively.".to_string(),
                publish_date: at(2024, 8, 5),
                img: "/assets/blog/03.jpg".to_string(),
            },
        ]
    }
}
