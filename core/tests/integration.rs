//! End-to-end fetches against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port in a background thread, then
//! drives `Fetcher` over real HTTP. Checks that request building, the
//! transport, and parsing agree with the server's schema.

use std::net::SocketAddr;
use std::sync::OnceLock;

use news_core::{ApiError, Fetcher, NewsClient, OrderBy, SearchQuery, Settings};

/// Start one mock server for the whole test binary and return its address.
fn server() -> SocketAddr {
    static ADDR: OnceLock<SocketAddr> = OnceLock::new();
    *ADDR.get_or_init(|| {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener).await
            })
            .unwrap();
        });
        addr
    })
}

fn endpoint() -> String {
    format!("http://{}/search", server())
}

fn query(topic: &str, order_by: OrderBy) -> SearchQuery {
    SearchQuery {
        topic: topic.to_string(),
        order_by,
        api_key: "test".to_string(),
    }
}

#[test]
fn fetch_returns_matching_articles_newest_first() {
    let client = NewsClient::new(&endpoint()).unwrap();
    let articles = Fetcher::new().fetch(&client, &query("debate", OrderBy::Newest)).unwrap();

    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].title, "Leaders' debate: what we learned");
    assert_eq!(articles[0].section, "Politics");
    assert_eq!(articles[0].published, "2019-05-11T05:00:12Z");
    assert_eq!(
        articles[0].url,
        "https://www.theguardian.com/politics/2019/may/11/leaders-debate"
    );
    assert_eq!(articles[2].title, "Debates over VAR rumble on");
}

#[test]
fn fetch_encodes_multi_word_topic() {
    let client = NewsClient::new(&endpoint()).unwrap();
    let articles = Fetcher::new()
        .fetch(&client, &query("climate talks", OrderBy::Relevance))
        .unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].section, "Environment");
}

#[test]
fn fetch_with_no_matches_is_ok_and_empty() {
    let client = NewsClient::new(&endpoint()).unwrap();
    let articles = Fetcher::new().fetch(&client, &query("astronomy", OrderBy::Newest)).unwrap();
    assert!(articles.is_empty());
}

#[test]
fn fetch_without_api_key_is_unauthorized() {
    let client = NewsClient::new(&endpoint()).unwrap();
    let mut q = query("debate", OrderBy::Newest);
    q.api_key.clear();
    let err = Fetcher::new().fetch(&client, &q).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { status: 401 }), "{err:?}");
}

#[test]
fn fetch_settings_resolves_endpoint() {
    let settings = Settings {
        endpoint: endpoint(),
        query: query("environment", OrderBy::Oldest),
    };
    let articles = Fetcher::new().fetch_settings(&settings).unwrap();
    assert_eq!(articles.len(), 1);
}

#[test]
fn execute_reports_non_200_as_data() {
    let client = NewsClient::new(&format!("http://{}/status/503", server())).unwrap();
    let params: [(&str, &str); 0] = [];
    let response = Fetcher::new().execute(&client.build_get(&params)).unwrap();
    assert_eq!(response.status, 503);
    let err = client.parse_search(response).unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 503, .. }));
}

#[test]
fn malformed_body_is_a_deserialization_error() {
    let client = NewsClient::new(&format!("http://{}/malformed", server())).unwrap();
    let err = Fetcher::new().fetch(&client, &SearchQuery::default()).unwrap_err();
    assert!(matches!(err, ApiError::Deserialization(_)), "{err:?}");
}

// --- lenient wrappers ---

#[test]
fn fetch_body_returns_raw_json_on_200() {
    let body = Fetcher::new().fetch_body(&endpoint(), &[("q", "debate"), ("api-key", "test")]);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["response"]["total"], 3);
}

#[test]
fn fetch_body_is_empty_on_non_200() {
    let fetcher = Fetcher::new();
    let params: [(&str, &str); 0] = [];
    for code in [404, 500] {
        let url = format!("http://{}/status/{code}", server());
        assert!(fetcher.fetch_body(&url, &params).is_empty(), "status {code}");
    }
    // Missing api-key: 401 with a JSON body, still swallowed.
    assert!(fetcher.fetch_body(&endpoint(), &[("q", "debate")]).is_empty());
}

#[test]
fn fetch_articles_or_empty_swallows_parse_failure() {
    let settings = Settings {
        endpoint: format!("http://{}/malformed", server()),
        query: SearchQuery::default(),
    };
    assert!(Fetcher::new().fetch_articles_or_empty(&settings).is_empty());
}

#[test]
fn fetch_articles_or_empty_passes_results_through() {
    let settings = Settings {
        endpoint: endpoint(),
        query: query("debate", OrderBy::Oldest),
    };
    let articles = Fetcher::new().fetch_articles_or_empty(&settings);
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].title, "Debates over VAR rumble on");
}
