use anyhow::{Context, Result};
use clap::Parser;
use news_core::config::{ENV_API_KEY, ENV_ENDPOINT, ENV_ORDER_BY, ENV_TOPIC};
use news_core::{ApiError, Fetcher, OrderBy, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

/// Fetch the latest articles for a topic from the news search endpoint.
///
/// Flags override the NEWS_ENDPOINT, NEWS_TOPIC, NEWS_ORDER_BY and
/// NEWS_API_KEY environment variables, which override the built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "news", version)]
struct Args {
    /// Search endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Topic to search for
    #[arg(long, short)]
    topic: Option<String>,

    /// Sort order: newest, oldest or relevance
    #[arg(long, short)]
    order_by: Option<OrderBy>,

    /// API key for the provider
    #[arg(long)]
    api_key: Option<String>,

    /// Print the articles as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    /// The flag value standing in for a `NEWS_*` variable, if one was given.
    fn flag(&self, key: &str) -> Option<String> {
        match key {
            ENV_ENDPOINT => self.endpoint.clone(),
            ENV_TOPIC => self.topic.clone(),
            ENV_ORDER_BY => self.order_by.map(|o| o.as_str().to_string()),
            ENV_API_KEY => self.api_key.clone(),
            _ => None,
        }
    }

    /// Resolve settings with flags first, then `env`, then defaults.
    fn resolve<F>(&self, env: F) -> Result<Settings, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Settings::from_lookup(|key| self.flag(key).or_else(|| env(key)))
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let settings = args
        .resolve(|key| std::env::var(key).ok())
        .context("resolving search settings")?;
    info!(
        endpoint = %settings.endpoint,
        topic = %settings.query.topic,
        order_by = %settings.query.order_by,
        "searching"
    );

    let articles = Fetcher::new()
        .fetch_settings(&settings)
        .with_context(|| format!("searching {}", settings.endpoint))?;
    info!(count = articles.len(), "fetched articles");

    if args.json {
        println!("{}", render::render_json(&articles)?);
    } else {
        print!("{}", render::render_text(&articles));
    }
    Ok(())
}
