use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::parse_published;

/// A news item as delivered by the remote feed. Every field is optional on
/// the wire except the title; missing fields are simply not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub insights: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "publisheddate", default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Article {
    /// The publish date parsed into UTC, if the raw string is parseable.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.published_date.as_deref().and_then(parse_published)
    }
}

/// Sort newest first. Articles with an unparsable or missing date sort
/// last; ties keep their fetched order.
pub fn sort_recent_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published().cmp(&a.published()));
}
