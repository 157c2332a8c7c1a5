//! Plain-text and JSON output for a list of articles.

use news_core::Article;

pub const EMPTY_MESSAGE: &str = "No news stories found.";

/// One block per article: section, title, date and time, URL.
pub fn render_text(articles: &[Article]) -> String {
    if articles.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }
    let mut out = String::new();
    for (i, article) in articles.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let when = match (article.display_date(), article.display_time()) {
            (Some(date), Some(time)) => format!("{date} {time}"),
            _ => article.published.clone(),
        };
        out.push_str(&format!(
            "[{}] {}\n    {when}\n    {}\n",
            article.section, article.title, article.url
        ));
    }
    out
}

pub fn render_json(articles: &[Article]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(articles)
}
