//! JSON-to-`Article` extraction.
//!
//! # Design
//! `parse_articles` is the strict form and reports why it failed.
//! `extract_articles` wraps it for callers that only want "whatever articles
//! there are": empty or absent input and malformed JSON all produce an empty
//! list, with the cause logged at warn level.

use tracing::warn;

use crate::error::ApiError;
use crate::types::{Article, SearchEnvelope};

/// Decode a search document into its `response.results[]` articles.
///
/// A document whose `results` array is empty parses to `Ok(vec![])`; an
/// empty or whitespace-only body is `ApiError::EmptyBody`.
pub fn parse_articles(body: &str) -> Result<Vec<Article>, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::EmptyBody);
    }
    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Ok(envelope.response.results)
}

/// Lenient form of `parse_articles`: never fails, returns an empty list on
/// any problem.
pub fn extract_articles(body: Option<&str>) -> Vec<Article> {
    let Some(body) = body else {
        return Vec::new();
    };
    match parse_articles(body) {
        Ok(articles) => articles,
        Err(ApiError::EmptyBody) => Vec::new(),
        Err(e) => {
            warn!(error = %e, "problem parsing the news JSON results");
            Vec::new()
        }
    }
}
