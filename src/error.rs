//! Error types for the proxy
//!
//! Every failure is answered with a JSON body of the form
//! `{"error": "<kind>", "message": "<detail>"}`. None of them are retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Request-level errors
#[derive(Debug, Error)]
pub enum ProxyError {
    /// A provider credential is missing or unusable. Raised before any
    /// network attempt.
    #[error("{0}")]
    Configuration(String),

    /// The upstream could not be reached, or the exchange broke down.
    #[error("{0}")]
    Proxy(String),

    #[error("Not found: {path}")]
    NotFound { path: String },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

/// Explanation returned for unmatched paths
pub const NOT_FOUND_MESSAGE: &str = "Use /v1/* for OpenAI or /anthropic/* for Anthropic";

impl ProxyError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Proxy(_) => StatusCode::BAD_GATEWAY,
            ProxyError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Short error label used in the `error` field
    pub fn label(&self) -> &'static str {
        match self {
            ProxyError::Configuration(_) => "Configuration Error",
            ProxyError::Proxy(_) => "Proxy Error",
            ProxyError::NotFound { .. } => "Not Found",
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Proxy(describe(&err))
    }
}

/// Flatten an error and its sources into one line.
///
/// reqwest's top-level message ("error sending request for url ...") hides
/// the useful part, e.g. "Connection refused".
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let message = match &self {
            ProxyError::Configuration(msg) | ProxyError::Proxy(msg) => msg.clone(),
            ProxyError::NotFound { .. } => NOT_FOUND_MESSAGE.to_string(),
        };

        let body = ErrorResponse {
            error: self.label(),
            message,
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, ProxyError>;
