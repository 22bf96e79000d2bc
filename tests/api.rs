//! End-to-end tests for the HTTP surface

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_test::TestServer;
use serde_json::Value;
use tower::ServiceExt;

use proofread_viewer::config::Config;
use proofread_viewer::db::{self, ArticleRepository, NewProofreadResult, ProofreadRepository};
use proofread_viewer::overlay::EscapeStrategy;
use proofread_viewer::routes;
use proofread_viewer::state::AppState;

const HIGHLIGHT: &str = r#"<span class="highlight">"#;

async fn seeded_app(config: Config) -> Router {
    let pool = db::memory_pool().await.unwrap();
    let articles = ArticleRepository::new(&pool);
    let results = ProofreadRepository::new(&pool);

    articles.upsert(1, "<p>The <i>cat</i> sat.</p>").await.unwrap();
    results
        .create(
            Some(1),
            &NewProofreadResult {
                category: "grammar".to_string(),
                text: "cat".to_string(),
                start: 4,
                end: 7,
                suggestion: r#"["cats"]"#.to_string(),
                message: "subject-verb".to_string(),
                sentence: "The cat sat.".to_string(),
            },
        )
        .await
        .unwrap();

    articles
        .upsert(2, "<p>1 &lt; 2 &amp;&amp; 校阅</p>")
        .await
        .unwrap();
    for (start, end, suggestion) in [(9, 11, "not json"), (5, 99, "[]"), (3, 3, "")] {
        results
            .create(
                Some(2),
                &NewProofreadResult {
                    start,
                    end,
                    suggestion: suggestion.to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    // Results without a stored article still show up in the list
    results
        .create(Some(3), &NewProofreadResult::default())
        .await
        .unwrap();

    routes::app(AppState::new(config, pool))
}

async fn server() -> TestServer {
    TestServer::new(seeded_app(Config::default()).await).unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = server().await;

    for path in ["/health", "/api/v1/health"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "proofread-viewer");
    }
}

#[tokio::test]
async fn test_list_articles_json() {
    let server = server().await;

    let response = server.get("/api/v1/articles").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 10);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["articles"][0]["articleId"], 1);
    assert_eq!(body["pages"], serde_json::json!([1]));
}

#[tokio::test]
async fn test_list_articles_paging_and_lenient_params() {
    let server = server().await;

    let body: Value = server
        .get("/api/v1/articles?page=2&pageSize=2")
        .await
        .json();
    assert_eq!(body["articles"], serde_json::json!([{ "articleId": 3 }]));
    assert_eq!(body["totalPages"], 2);

    let response = server.get("/api/v1/articles?page=abc&pageSize=-1").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 10);
}

#[tokio::test]
async fn test_article_detail_json() {
    let server = server().await;

    let response = server.get("/api/v1/articles/1").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["articleId"], 1);
    assert_eq!(body["content"], "<p>The <i>cat</i> sat.</p>");
    assert_eq!(body["results"][0]["type"], "grammar");
    assert_eq!(body["results"][0]["start"], 4);

    let highlighted = body["highlightedContent"].as_str().unwrap();
    assert!(highlighted.starts_with(&format!("The {HIGHLIGHT}")));
    assert!(highlighted.contains(r#"<span class="tooltip-suggestion">cats</span>"#));
    assert!(highlighted.contains("subject-verb"));
    assert!(highlighted.ends_with("cat</span> sat."));
}

#[tokio::test]
async fn test_article_detail_escapes_and_drops_invalid_spans() {
    let server = server().await;

    let body: Value = server.get("/api/v1/articles/2").await.json();
    let highlighted = body["highlightedContent"].as_str().unwrap();

    assert!(highlighted.starts_with("1 &lt; 2 &amp;&amp; "));
    assert_eq!(highlighted.matches(HIGHLIGHT).count(), 1);
    assert!(highlighted.contains(r#"<span class="tooltip-suggestion">not json</span>"#));
    assert!(highlighted.ends_with("校阅</span>"));
}

#[tokio::test]
async fn test_article_errors() {
    let server = server().await;

    let response = server.get("/api/v1/articles/404").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "not_found");

    let response = server.get("/api/v1/articles/3").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.get("/articles/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_article_pages_html() {
    let server = server().await;

    let response = server.get("/articles").await;
    response.assert_status_ok();
    let list = response.text();
    assert!(list.contains("<a href=\"/articles/1\">Article 1</a>"));
    assert!(list.contains("3 articles, page 1 of 1"));

    let response = server.get("/articles/1").await;
    response.assert_status_ok();
    let detail = response.text();
    assert!(detail.contains(&format!("<div class=\"content\">The {HIGHLIGHT}")));
    assert!(detail.contains("<td>grammar</td>"));
}

#[tokio::test]
async fn test_root_redirects_to_list() {
    let app = seeded_app(Config::default()).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/articles");
}

#[tokio::test]
async fn test_detail_page_content_type() {
    let app = seeded_app(Config::default()).await;

    let response = app
        .oneshot(Request::builder().uri("/articles/2").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("1 &lt; 2"));
}

#[tokio::test]
async fn test_configured_naming_and_restore_strategy() {
    let mut config = Config::default();
    config.overlay.class_prefix = "pr".to_string();
    config.overlay.escape_strategy = EscapeStrategy::Restore;
    let server = TestServer::new(seeded_app(config).await).unwrap();

    let body: Value = server.get("/api/v1/articles/1").await.json();
    let highlighted = body["highlightedContent"].as_str().unwrap();

    assert!(highlighted.starts_with(r#"The <span class="pr-highlight">"#));
    assert!(highlighted.contains(r#"<span class="pr-tooltip-suggestion">cats</span>"#));

    let detail = server.get("/articles/1").await.text();
    assert!(detail.contains(".pr-highlight:hover > .pr-tooltip"));
}

#[tokio::test]
async fn test_all_articles_on_one_page() {
    let server = server().await;

    let response = server.get("/articles/all").await;
    response.assert_status_ok();
    let html = response.text();

    // Article 3 has results but no stored content
    assert!(html.contains("<h1>All articles (2)</h1>"));
    assert!(html.contains("<a href=\"/articles/1\">Article 1</a> (1 results)"));
    assert!(html.contains("<a href=\"/articles/2\">Article 2</a> (3 results)"));
    assert!(!html.contains("Article 3"));
    assert_eq!(html.matches(HIGHLIGHT).count(), 2);
    assert!(html.contains(&format!("<div class=\"content\">The {HIGHLIGHT}")));
    assert!(html.contains("校阅</span></div>"));
}

#[tokio::test]
async fn test_all_articles_json() {
    let server = server().await;

    let response = server.get("/api/v1/articles/all").await;
    response.assert_status_ok();
    let body: Value = response.json();

    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|article| article["articleId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(body[1]["highlightedContent"]
        .as_str()
        .unwrap()
        .starts_with("1 &lt; 2 &amp;&amp; "));
}

#[tokio::test]
async fn test_list_articles_huge_page() {
    let server = server().await;

    let response = server
        .get("/api/v1/articles?page=9223372036854775807&pageSize=100")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["articles"], serde_json::json!([]));
    assert_eq!(body["page"], i64::MAX);

    server
        .get("/articles?page=9223372036854775807")
        .await
        .assert_status_ok();
}
