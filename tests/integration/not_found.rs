//! Unmatched path integration tests

use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::common::default_test_server;

#[tokio::test]
async fn test_unknown_paths_return_404_json() {
    let server = default_test_server();

    for path in ["/favicon.ico", "/api/generate", "/v1", "/v2/models", "/anthropic", "/health/"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*",
            "CORS header missing for {}",
            path
        );

        let json: Value = response.json();
        assert_eq!(json["error"], "Not Found");
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("/v1/*"), "message should mention /v1/*");
        assert!(message.contains("/anthropic/*"), "message should mention /anthropic/*");
    }
}

#[tokio::test]
async fn test_unknown_paths_404_for_every_method() {
    let server = default_test_server();

    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = server.method(method.clone(), "/openai/v1/models").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
