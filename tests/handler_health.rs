mod common;

use axum::http::StatusCode;
use url_resolver::application::services::ResolverSettings;

#[tokio::test]
async fn test_health_endpoint() {
    let server = common::create_test_server(ResolverSettings::default());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "URL Resolver");
    assert!(json["timestamp"].as_f64().unwrap() > 1_600_000_000.0);
}

#[tokio::test]
async fn test_service_info_endpoint() {
    let server = common::create_test_server(ResolverSettings::default());

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["service"], "URL Resolver");
    assert_eq!(json["status"], "running");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(
        json["endpoints"],
        serde_json::json!(["/health", "/resolve", "/resolve-batch"])
    );
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let server = common::create_test_server(ResolverSettings::default());

    let response = server.get("/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&serde_json::json!({ "error": "Endpoint not found" }));
}
