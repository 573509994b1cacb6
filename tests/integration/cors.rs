//! CORS integration tests
//!
//! Preflight handling and the header set stamped on every response.

use axum::http::{HeaderName, HeaderValue, Method, StatusCode};

use crate::common::{create_test_server, default_test_server, TestConfig};
use crate::mocks::MockUpstream;

fn assert_cors_headers(response: &axum_test::TestResponse) {
    let headers = response.headers();
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert_eq!(
        headers.get("access-control-allow-methods").unwrap(),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        headers.get("access-control-allow-headers").unwrap(),
        "Content-Type, Authorization, X-Requested-With"
    );
}

#[tokio::test]
async fn test_preflight_on_any_path_is_204_with_empty_body() {
    let server = default_test_server();

    for path in ["/", "/health", "/v1/chat/completions", "/anthropic/v1/messages", "/nowhere"] {
        let response = server.method(Method::OPTIONS, path).await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.as_bytes().is_empty(), "preflight body for {}", path);
        assert_cors_headers(&response);
    }
}

#[tokio::test]
async fn test_preflight_never_reaches_upstream() {
    let openai = MockUpstream::start().await;
    openai.expect_no_requests().await;
    let server = create_test_server(TestConfig::new().openai_url(openai.uri()).build());

    let response = server
        .method(Method::OPTIONS, "/v1/chat/completions")
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_error_responses_carry_cors_headers() {
    let server = create_test_server(TestConfig::new().without_openai_key().build());

    // Not found, configuration error, proxy error
    assert_cors_headers(&server.get("/unknown").await);
    assert_cors_headers(&server.post("/v1/chat/completions").await);
    assert_cors_headers(&server.post("/anthropic/v1/messages").await);
}

#[tokio::test]
async fn test_relayed_responses_carry_cors_headers() {
    let openai = MockUpstream::start().await;
    openai.mock_openai_models().await;
    let server = create_test_server(TestConfig::new().openai_url(openai.uri()).build());

    let response = server.get("/v1/models").await;

    response.assert_status_ok();
    assert_cors_headers(&response);
}
