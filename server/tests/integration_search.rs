use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use engine::EngineConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use std::fs;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

fn build_tiny_app() -> (TempDir, Router) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.txt");
    fs::write(
        &path,
        "0 rust is great rust systems programming\n\
         1 learning rust takes patience and practice\n\
         2 cooking pasta at home\n\
         3 gardening in spring\n\
         4 the history of jazz\n",
    )
    .unwrap();
    let app = server::build_app(path.to_str().unwrap(), EngineConfig::default()).unwrap();
    (dir, app)
}

async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let (_dir, app) = build_tiny_app();

    let (status, json) = call(app, "/search?q=rust&k=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_hits"], 2);
    let arr = json["results"].as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["doc_id"], 0);
    assert_eq!(arr[1]["doc_id"], 1);
    assert_eq!(arr[0]["highlights"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn search_without_valid_terms_is_a_bad_request() {
    let (_dir, app) = build_tiny_app();
    let (status, json) = call(app, "/search?q=zebra").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "no valid input");
}

#[tokio::test]
async fn search_without_query_returns_json_error() {
    let (_dir, app) = build_tiny_app();
    let (status, json) = call(app, "/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "no valid input");
}

#[tokio::test]
async fn df_lists_terms_in_order() {
    let (_dir, app) = build_tiny_app();
    let (status, json) = call(app, "/df").await;
    assert_eq!(status, StatusCode::OK);
    let terms: Vec<&str> = json.as_array().unwrap().iter().map(|t| t["term"].as_str().unwrap()).collect();
    let mut sorted = terms.clone();
    sorted.sort();
    assert_eq!(terms, sorted);
    assert!(json.as_array().unwrap().iter().any(|t| t["term"] == "rust" && t["doc_count"] == 2));
}

#[tokio::test]
async fn tf_reports_counts_and_errors() {
    let (_dir, app) = build_tiny_app();
    let (status, json) = call(app.clone(), "/tf/0/rust").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);

    let (status, _) = call(app.clone(), "/tf/9/rust").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(app, "/tf/0/zebra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn doc_returns_normalized_text() {
    let (_dir, app) = build_tiny_app();
    let (status, json) = call(app.clone(), "/doc/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["text"], "learning rust takes patience and practice");
    assert_eq!(json["word_count"], 7);

    let (status, _) = call(app, "/doc/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
