#![allow(dead_code)]

use axum_test::TestServer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use url_resolver::application::services::{ResolutionService, ResolverSettings};
use url_resolver::infrastructure::http::{DEFAULT_USER_AGENT, ReqwestTransport};
use url_resolver::routes::app_router;
use url_resolver::state::AppState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Article page carrying the signed decoding attributes.
pub const ARTICLE_PAGE: &str = r#"<!doctype html><html><body>
<c-wiz jsrenderer="W6zj5"><div jscontroller="aLI87" data-n-a-sg="AZ5r3eSig" data-n-a-ts="1718122353" data-n-a-id="ABC"></div></c-wiz>
</body></html>"#;

pub const BATCHEXECUTE_PATH: &str = "/_/DotsSplashUi/data/batchexecute";

/// batchexecute response decoding to `url`.
pub fn rpc_response(url: &str) -> String {
    format!(
        ")]}}'\n\n[[\"wrb.fr\",\"Fbv4je\",\"[\\\"garturlres\\\",\\\"{url}\\\",1]\",null,null,null,\"generic\"]]\n\n[[\"di\",21],[\"af.httprm\",20,\"-1\",3]]"
    )
}

/// Settings pointing the Google News decoder at `base_url` with short timeouts.
pub fn test_settings(base_url: &str) -> ResolverSettings {
    ResolverSettings {
        google_news_base_url: base_url.to_string(),
        params_timeout: Duration::from_secs(5),
        rpc_timeout: Duration::from_secs(5),
        standard_timeout: Duration::from_secs(5),
        batch_concurrency: 1,
    }
}

pub fn create_test_state(settings: ResolverSettings) -> AppState {
    let transport = ReqwestTransport::new(DEFAULT_USER_AGENT).unwrap();
    let service = ResolutionService::new(Arc::new(transport), settings);
    AppState::new(Arc::new(service))
}

/// Full application router without rate limiting.
pub fn create_test_server(settings: ResolverSettings) -> TestServer {
    TestServer::new(app_router(create_test_state(settings), false)).unwrap()
}

/// Full application router with `handle` backing `GET /metrics`.
pub fn create_test_server_with_metrics(
    settings: ResolverSettings,
    handle: PrometheusHandle,
) -> TestServer {
    let state = create_test_state(settings).with_metrics(handle);
    TestServer::new(app_router(state, false)).unwrap()
}

/// Mounts a successful two-step Google News exchange for `token` on `server`.
pub async fn mount_google_news(server: &MockServer, token: &str, destination: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/rss/articles/{token}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARTICLE_PAGE))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(BATCHEXECUTE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(rpc_response(destination)))
        .mount(server)
        .await;
}
