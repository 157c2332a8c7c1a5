//! Stateless HTTP request builder and response parser for the search API.
//!
//! # Design
//! `NewsClient` holds only the validated endpoint URL and carries no mutable
//! state between calls. A search is split into `build_search`, which produces
//! an `HttpRequest`, and `parse_search`, which consumes an `HttpResponse`.
//! The caller (or `Fetcher`) executes the round-trip in between.

use tracing::debug;
use url::Url;

use crate::config::SearchQuery;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::parse::parse_articles;
use crate::types::Article;

/// Synchronous, stateless client for the news search endpoint.
#[derive(Debug, Clone)]
pub struct NewsClient {
    base_url: Url,
}

impl NewsClient {
    /// Validate `base_url` as an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let url = Url::parse(base_url.trim())
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ApiError::InvalidUrl(format!(
                    "{base_url}: unsupported scheme {other}"
                )))
            }
        }
        if url.host_str().is_none() {
            return Err(ApiError::InvalidUrl(format!("{base_url}: missing host")));
        }
        Ok(Self { base_url: url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build a GET against the endpoint with `params` appended as
    /// URL-encoded query pairs. Pairs already present on the base URL are kept.
    pub fn build_get<K, V>(&self, params: &[(K, V)]) -> HttpRequest
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key.as_ref(), value.as_ref());
            }
        }
        debug!(url = %url, "built search request");
        HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn build_search(&self, query: &SearchQuery) -> HttpRequest {
        self.build_get(&query.to_params())
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<Article>, ApiError> {
        check_status(&response)?;
        parse_articles(&response.body)
    }
}

/// Map anything but 200 to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        401 | 403 => Err(ApiError::Unauthorized {
            status: response.status,
        }),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}
