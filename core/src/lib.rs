//! Synchronous client core for a news search REST endpoint.
//!
//! # Overview
//! Turns a topic, sort order and API key into a search request, executes it,
//! and decodes `response.results[]` into `Article` records.
//!
//! # Design
//! - `NewsClient` is stateless and does no I/O: `build_search` produces an
//!   `HttpRequest`, `parse_search` consumes an `HttpResponse`.
//! - `Fetcher` is the blocking executor in between, built on `ureq` with
//!   fixed connect/read timeouts.
//! - The strict API returns `Result<_, ApiError>` with one variant per
//!   failure stage. `Fetcher::fetch_body` and `extract_articles` are lenient
//!   wrappers that log and return an empty value instead.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod parse;
pub mod types;

pub use client::NewsClient;
pub use config::{OrderBy, SearchQuery, Settings};
pub use error::ApiError;
pub use fetch::Fetcher;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use parse::{extract_articles, parse_articles};
pub use types::Article;
