//! Provider forwarding handler
//!
//! Buffers the inbound body and hands the request to the upstream client.
//! The provider has already been picked from the path prefix.

use std::sync::Arc;

use axum::{extract::Request, response::Response};
use http_body_util::BodyExt;
use tracing::info;

use crate::{
    error::{AppResult, ProxyError},
    proxy::{Inbound, Provider},
    AppState,
};

/// Forward one request to `provider` at `upstream_path`
pub async fn forward(
    state: Arc<AppState>,
    provider: Provider,
    upstream_path: String,
    request: Request,
) -> AppResult<Response> {
    let (parts, body) = request.into_parts();

    let body = body
        .collect()
        .await
        .map_err(|e| ProxyError::Proxy(format!("Failed to read request body: {}", e)))?
        .to_bytes();

    let inbound = Inbound {
        method: parts.method.clone(),
        path: &upstream_path,
        query: parts.uri.query(),
        headers: &parts.headers,
        body,
    };

    let response = state.upstream.forward(provider, inbound).await?;

    info!(
        provider = %provider,
        method = %parts.method,
        path = %parts.uri.path(),
        status = %response.status(),
        "Forwarded request completed"
    );

    Ok(response)
}
