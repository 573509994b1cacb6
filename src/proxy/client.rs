//! Upstream forwarding client
//!
//! Sends a prepared request to OpenAI or Anthropic and turns the upstream
//! response back into an axum response. The body is streamed, not buffered.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Response, StatusCode};
use bytes::Bytes;
use tracing::instrument;

use crate::config::Config;
use crate::error::{AppResult, ProxyError};
use crate::proxy::headers::filter_response_headers;
use crate::proxy::logging::RequestContext;
use crate::proxy::request::UpstreamRequest;
use crate::proxy::Provider;

/// Inbound request parts handed to the client
#[derive(Debug)]
pub struct Inbound<'a> {
    pub method: Method,
    /// Path to request upstream (provider prefix already handled)
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub headers: &'a HeaderMap,
    pub body: Bytes,
}

/// Client for both upstream providers
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    config: Config,
}

impl UpstreamClient {
    pub fn new(client: reqwest::Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Check if a provider has an API key
    pub fn is_configured(&self, provider: Provider) -> bool {
        self.config.api_key(provider).is_some()
    }

    /// Forward a request to `provider`.
    ///
    /// Missing keys fail before any network call. Transport failures become
    /// [`ProxyError::Proxy`]; upstream HTTP errors are relayed as-is.
    #[instrument(skip_all, fields(provider = %provider, method = %inbound.method, path = %inbound.path))]
    pub async fn forward(&self, provider: Provider, inbound: Inbound<'_>) -> AppResult<Response<Body>> {
        let ctx = RequestContext::new(provider, inbound.method.as_str(), inbound.path);
        ctx.log_request_start();

        let Some(api_key) = self.config.api_key(provider) else {
            ctx.log_not_configured();
            return Err(ProxyError::Configuration(format!(
                "{} not configured",
                provider.api_key_var()
            )));
        };

        let request = UpstreamRequest::builder(provider, inbound.method)
            .base_url(self.config.base_url(provider))
            .path(inbound.path, inbound.query)
            .inbound_headers(inbound.headers)
            .body(inbound.body)
            .build(api_key)?;

        ctx.log_upstream_request(
            request.url(),
            request.headers().len(),
            request.body().map(|b| b.len()),
        );

        let (method, url, headers, body) = request.into_parts();
        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            let err = ProxyError::from(e);
            ctx.log_connection_error(&err.to_string(), &url);
            err
        })?;

        ctx.log_upstream_response(response.status().as_u16(), response.content_length());

        convert_response(response)
    }
}

/// Convert reqwest response to axum response
fn convert_response(response: reqwest::Response) -> AppResult<Response<Body>> {
    let status = StatusCode::from_u16(response.status().as_u16())
        .map_err(|e| ProxyError::Proxy(format!("Invalid upstream status: {}", e)))?;

    let mut builder = Response::builder().status(status);
    if let Some(headers) = builder.headers_mut() {
        headers.extend(filter_response_headers(response.headers()));
    }

    let body = Body::from_stream(response.bytes_stream());

    builder
        .body(body)
        .map_err(|e| ProxyError::Proxy(format!("Failed to build response: {}", e)))
}
