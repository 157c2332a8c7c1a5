use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub section_name: String,
    pub web_publication_date: String,
    pub web_title: String,
    pub web_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub orderby: Option<String>,
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

pub type Db = Arc<Vec<Article>>;

fn article(id: &str, section: &str, date: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        section_name: section.to_string(),
        web_publication_date: date.to_string(),
        web_title: title.to_string(),
        web_url: format!("https://www.theguardian.com/{id}"),
    }
}

/// Fixed articles served by `app()`.
pub fn fixtures() -> Vec<Article> {
    vec![
        article(
            "politics/2019/may/11/leaders-debate",
            "Politics",
            "2019-05-11T05:00:12Z",
            "Leaders' debate: what we learned",
        ),
        article(
            "commentisfree/2019/may/10/who-won-the-debate",
            "Opinion",
            "2019-05-10T18:30:00Z",
            "Who really won the debate?",
        ),
        article(
            "environment/2019/may/12/climate-talks",
            "Environment",
            "2019-05-12T09:15:00Z",
            "Climate talks stall over coal",
        ),
        article(
            "sport/2019/may/09/debates-over-var",
            "Sport",
            "2019-05-09T21:45:30Z",
            "Debates over VAR rumble on",
        ),
    ]
}

pub fn app() -> Router {
    app_with(fixtures())
}

pub fn app_with(articles: Vec<Article>) -> Router {
    let db: Db = Arc::new(articles);
    Router::new()
        .route("/search", get(search))
        .route("/status/{code}", get(status))
        .route("/malformed", get(malformed))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn search(State(db): State<Db>, Query(params): Query<SearchParams>) -> Response {
    if params.api_key.as_deref().map_or(true, str::is_empty) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthorized" })),
        )
            .into_response();
    }

    let mut results = filter_by_topic(&db, params.q.as_deref());
    let order = params.orderby.as_deref().unwrap_or("relevance");
    match order {
        "newest" => results.sort_by(|a, b| b.web_publication_date.cmp(&a.web_publication_date)),
        "oldest" => results.sort_by(|a, b| a.web_publication_date.cmp(&b.web_publication_date)),
        "relevance" => {}
        other => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "response": {
                        "status": "error",
                        "message": format!("orderby: unknown value {other}"),
                    }
                })),
            )
                .into_response();
        }
    }

    let total = results.len();
    let pages = usize::from(total > 0);
    Json(json!({
        "response": {
            "status": "ok",
            "userTier": "developer",
            "total": total,
            "startIndex": pages,
            "pageSize": 10,
            "currentPage": 1,
            "pages": pages,
            "orderBy": order,
            "results": results,
        }
    }))
    .into_response()
}

fn filter_by_topic(db: &[Article], topic: Option<&str>) -> Vec<Article> {
    let needle = topic.unwrap_or("").trim().to_lowercase();
    db.iter()
        .filter(|a| {
            needle.is_empty()
                || a.web_title.to_lowercase().contains(&needle)
                || a.section_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

async fn malformed() -> impl IntoResponse {
    (
        [("content-type", "application/json")],
        r#"{"response":{"status":"ok","results":[{"sectionName":"Politics","webTi"#,
    )
}
