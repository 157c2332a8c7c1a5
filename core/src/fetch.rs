//! Blocking executor for `HttpRequest` values.
//!
//! # Design
//! `Fetcher` wraps a `ureq::Agent` configured with fixed connect and read
//! timeouts and with status-as-error disabled, so 4xx/5xx come back as data
//! and `NewsClient::parse_search` decides what they mean. One call performs
//! exactly one GET: no retry, no redirect-following beyond ureq's default.
//!
//! `fetch_body` and `fetch_articles_or_empty` are the lenient entry points:
//! they log any failure and hand back an empty value.

use std::time::Duration;

use tracing::{debug, warn};

use crate::client::NewsClient;
use crate::config::{SearchQuery, Settings};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::parse::extract_articles;
use crate::types::Article;

pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);
pub const READ_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Executes requests built by `NewsClient` over real HTTP.
#[derive(Debug, Clone)]
pub struct Fetcher {
    agent: ureq::Agent,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_timeouts(CONNECT_TIMEOUT, READ_TIMEOUT)
    }

    pub fn with_timeouts(connect: Duration, read: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(connect))
            .timeout_recv_response(Some(read))
            .timeout_recv_body(Some(read))
            .build()
            .new_agent();
        Self { agent }
    }

    /// Run one request and return whatever the server answered.
    ///
    /// Only transport-level problems are errors here; a 500 is `Ok`.
    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = req.method.as_str(), url = %req.url, "sending request");
        let mut builder = match req.method {
            HttpMethod::Get => self.agent.get(&req.url),
        };
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(map_transport_error)?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    /// Build, execute and parse one search.
    pub fn fetch(&self, client: &NewsClient, query: &SearchQuery) -> Result<Vec<Article>, ApiError> {
        let response = self.execute(&client.build_search(query))?;
        client.parse_search(response)
    }

    /// Resolve `settings` into a client and run the search.
    pub fn fetch_settings(&self, settings: &Settings) -> Result<Vec<Article>, ApiError> {
        let client = NewsClient::new(&settings.endpoint)?;
        self.fetch(&client, &settings.query)
    }

    /// GET `base_url` with `params` and return the body text.
    ///
    /// Returns an empty string when the URL is malformed, the connection
    /// fails or times out, or the status is not 200. The cause is logged.
    pub fn fetch_body<K, V>(&self, base_url: &str, params: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let result = NewsClient::new(base_url)
            .and_then(|client| self.execute(&client.build_get(params)))
            .and_then(|response| match response.status {
                200 => Ok(response.body),
                status => Err(ApiError::Http {
                    status,
                    body: response.body,
                }),
            });
        match result {
            Ok(body) => body,
            Err(e) => {
                warn!(url = base_url, error = %e, "problem retrieving the news JSON results");
                String::new()
            }
        }
    }

    /// Lenient end-to-end search: fetch, then extract, empty on any failure.
    pub fn fetch_articles_or_empty(&self, settings: &Settings) -> Vec<Article> {
        let body = self.fetch_body(&settings.endpoint, &settings.query.to_params());
        extract_articles(Some(&body))
    }
}

fn map_transport_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Timeout(kind) => ApiError::Timeout(format!("{kind:?}")),
        other => ApiError::Transport(other.to_string()),
    }
}
