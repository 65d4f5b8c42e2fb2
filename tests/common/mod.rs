#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use smart_url::routes::router;
use smart_url::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new()
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Shortens `url` through the API and returns the `short_url` path.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server.post("/shorten").json(&json!({ "url": url })).await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string()
}
