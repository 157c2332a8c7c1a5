//! Search parameters and endpoint configuration.
//!
//! # Design
//! `SearchQuery` is the set of user-facing knobs (topic and sort order) plus
//! the API key; `Settings` pairs it with the endpoint. Both have defaults
//! matching the public developer setup, and `Settings::from_env` lets any
//! field be overridden without a config file.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";
pub const DEFAULT_TOPIC: &str = "debates";
pub const DEFAULT_API_KEY: &str = "test";

pub const ENV_ENDPOINT: &str = "NEWS_ENDPOINT";
pub const ENV_TOPIC: &str = "NEWS_TOPIC";
pub const ENV_ORDER_BY: &str = "NEWS_ORDER_BY";
pub const ENV_API_KEY: &str = "NEWS_API_KEY";

/// Sort order accepted by the `orderby` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderBy {
    #[default]
    Newest,
    Oldest,
    Relevance,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Newest => "newest",
            OrderBy::Oldest => "oldest",
            OrderBy::Relevance => "relevance",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(OrderBy::Newest),
            "oldest" => Ok(OrderBy::Oldest),
            "relevance" => Ok(OrderBy::Relevance),
            other => Err(ApiError::Config(format!("unknown order: {other}"))),
        }
    }
}

/// Parameters for one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub topic: String,
    pub order_by: OrderBy,
    pub api_key: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            order_by: OrderBy::default(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl SearchQuery {
    /// Query pairs in the order they are appended to the URL.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.topic.clone()),
            ("orderby", self.order_by.as_str().to_string()),
            ("api-key", self.api_key.clone()),
        ]
    }
}

/// Endpoint plus query, resolved from defaults and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub query: SearchQuery,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            query: SearchQuery::default(),
        }
    }
}

impl Settings {
    /// Read `NEWS_ENDPOINT`, `NEWS_TOPIC`, `NEWS_ORDER_BY` and `NEWS_API_KEY`,
    /// falling back to defaults for unset or blank variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Settings::default();

        let order_by = match get(ENV_ORDER_BY) {
            Some(raw) => raw.parse()?,
            None => defaults.query.order_by,
        };

        Ok(Settings {
            endpoint: get(ENV_ENDPOINT).unwrap_or(defaults.endpoint),
            query: SearchQuery {
                topic: get(ENV_TOPIC).unwrap_or(defaults.query.topic),
                order_by,
                api_key: get(ENV_API_KEY).unwrap_or(defaults.query.api_key),
            },
        })
    }
}
