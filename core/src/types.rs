//! Domain records for the news search API.
//!
//! # Design
//! `Article` is the only domain type. The envelope structs exist solely to
//! walk `response.results[]` during deserialization; every other field the
//! provider sends (`id`, `status`, `total`, `pillarName`, ...) is ignored.
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single news item returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    #[serde(rename = "sectionName")]
    pub section: String,
    #[serde(rename = "webTitle")]
    pub title: String,
    /// ISO 8601 timestamp, kept verbatim as sent by the server.
    #[serde(rename = "webPublicationDate")]
    pub published: String,
    #[serde(rename = "webUrl")]
    pub url: String,
}

impl Article {
    pub fn new(section: &str, title: &str, published: &str, url: &str) -> Self {
        Self {
            section: section.to_string(),
            title: title.to_string(),
            published: published.to_string(),
            url: url.to_string(),
        }
    }

    /// Publication date as `May 11, 2019`, or `None` if the timestamp is not
    /// valid RFC 3339.
    pub fn display_date(&self) -> Option<String> {
        self.published_at().map(|ts| ts.format("%b %d, %Y").to_string())
    }

    /// Publication time on a 12-hour clock, e.g. `5:00 AM`.
    pub fn display_time(&self) -> Option<String> {
        self.published_at().map(|ts| ts.format("%-I:%M %p").to_string())
    }

    fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.published).ok()
    }
}

/// Top-level search document: `{ "response": { ... } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    pub response: SearchResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub results: Vec<Article>,
}
