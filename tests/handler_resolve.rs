mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_resolve_missing_url_parameter() {
    let server = common::create_test_server(common::test_settings("http://127.0.0.1:9"));

    let response = server.get("/resolve").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing url parameter" }));
}

#[tokio::test]
async fn test_resolve_empty_url_parameter() {
    let server = common::create_test_server(common::test_settings("http://127.0.0.1:9"));

    let response = server.get("/resolve").add_query_param("url", "").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_resolve_follows_redirects() {
    let remote = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/short"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/hop", remote.uri())),
        )
        .mount(&remote)
        .await;
    Mock::given(method("GET"))
        .and(path("/hop"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("Location", format!("{}/final", remote.uri())),
        )
        .mount(&remote)
        .await;
    Mock::given(method("GET"))
        .and(path("/final"))
        .respond_with(ResponseTemplate::new(200).set_body_string("landed"))
        .mount(&remote)
        .await;

    let server = common::create_test_server(common::test_settings(&remote.uri()));
    let original = format!("{}/short", remote.uri());

    let response = server
        .get("/resolve")
        .add_query_param("url", &original)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "original": original,
        "final_url": format!("{}/final", remote.uri()),
        "status_code": 200,
        "method": "standard"
    }));
}

#[tokio::test]
async fn test_resolve_reports_landing_status_verbatim() {
    let remote = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&remote)
        .await;

    let server = common::create_test_server(common::test_settings(&remote.uri()));

    let response = server
        .get("/resolve")
        .add_query_param("url", format!("{}/gone", remote.uri()))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status_code"], 404);
    assert_eq!(json["method"], "standard");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_resolve_is_idempotent() {
    let remote = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(
            ResponseTemplate::new(307).insert_header("Location", format!("{}/b", remote.uri())),
        )
        .mount(&remote)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&remote)
        .await;

    let server = common::create_test_server(common::test_settings(&remote.uri()));
    let url = format!("{}/a", remote.uri());

    let first = server.get("/resolve").add_query_param("url", &url).await.json::<Value>();
    let second = server.get("/resolve").add_query_param("url", &url).await.json::<Value>();

    assert_eq!(first["final_url"], second["final_url"]);
    assert_eq!(first["status_code"], second["status_code"]);
}

#[tokio::test]
async fn test_resolve_unreachable_host_reports_error() {
    let server = common::create_test_server(common::test_settings("http://127.0.0.1:9"));

    let response = server
        .get("/resolve")
        .add_query_param("url", "http://127.0.0.1:9/nothing-listens-here")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status_code"], 500);
    assert_eq!(json["method"], "standard");
    assert!(json["error"].is_string());
    assert!(json.get("final_url").is_none());
}

#[tokio::test]
async fn test_resolve_malformed_url_reports_error() {
    let server = common::create_test_server(common::test_settings("http://127.0.0.1:9"));

    let response = server
        .get("/resolve")
        .add_query_param("url", "definitely not a url")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status_code"], 500);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_resolve_google_news_link() {
    let google = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rss/articles/CBMiABC"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::ARTICLE_PAGE))
        .expect(1)
        .mount(&google)
        .await;
    Mock::given(method("POST"))
        .and(path(common::BATCHEXECUTE_PATH))
        .and(header(
            "content-type",
            "application/x-www-form-urlencoded;charset=UTF-8",
        ))
        .and(header("referer", format!("{}/", google.uri()).as_str()))
        .and(body_string_contains("f.req=%5B%5B%5B%22Fbv4je%22"))
        .and(body_string_contains("CBMiABC"))
        .and(body_string_contains("1718122353"))
        .and(body_string_contains("AZ5r3eSig"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::rpc_response("https://example.com/real-story")),
        )
        .expect(1)
        .mount(&google)
        .await;

    let server = common::create_test_server(common::test_settings(&google.uri()));
    let original = "https://news.google.com/rss/articles/CBMiABC?oc=5";

    let response = server
        .get("/resolve")
        .add_query_param("url", original)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "original": original,
        "final_url": "https://example.com/real-story",
        "status_code": 200,
        "method": "google_news"
    }));
}

#[tokio::test]
async fn test_resolve_google_news_alternate_path() {
    let google = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rss/articles/XYZ"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&google)
        .await;
    Mock::given(method("GET"))
        .and(path("/articles/XYZ"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::ARTICLE_PAGE))
        .expect(1)
        .mount(&google)
        .await;
    Mock::given(method("POST"))
        .and(path(common::BATCHEXECUTE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::rpc_response("https://example.com/alt")),
        )
        .mount(&google)
        .await;

    let server = common::create_test_server(common::test_settings(&google.uri()));

    let response = server
        .get("/resolve")
        .add_query_param("url", "https://news.google.com/articles/XYZ")
        .await;

    let json = response.json::<Value>();
    assert_eq!(json["method"], "google_news");
    assert_eq!(json["final_url"], "https://example.com/alt");
}

#[tokio::test]
async fn test_resolve_repeated_url_uses_first_value() {
    let remote = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/first"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&remote)
        .await;

    let server = common::create_test_server(common::test_settings(&remote.uri()));
    let first = format!("{}/first", remote.uri());
    let second = format!("{}/second", remote.uri());

    let response = server
        .get("/resolve")
        .add_query_param("url", &first)
        .add_query_param("url", &second)
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["original"], first);
    assert_eq!(json["status_code"], 200);
}
