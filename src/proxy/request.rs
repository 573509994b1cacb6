//! Upstream request descriptor
//!
//! An [`UpstreamRequest`] is built once per inbound request and never
//! mutated afterwards. The builder owns its own header map, so nothing it
//! does is visible through the inbound request.

use axum::http::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Method,
};
use bytes::Bytes;

use crate::error::{AppResult, ProxyError};
use crate::proxy::headers::copy_request_headers;
use crate::proxy::provider::{Provider, ANTHROPIC_VERSION};

const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");
const ANTHROPIC_VERSION_HEADER: HeaderName = HeaderName::from_static("anthropic-version");

/// Fully prepared request for an upstream provider
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl UpstreamRequest {
    /// Start building a request for `provider`
    pub fn builder(provider: Provider, method: Method) -> UpstreamRequestBuilder {
        UpstreamRequestBuilder {
            provider,
            method,
            base_url: String::new(),
            path_and_query: String::new(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Split into parts for sending
    pub fn into_parts(self) -> (Method, String, HeaderMap, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for [`UpstreamRequest`]
#[derive(Debug)]
pub struct UpstreamRequestBuilder {
    provider: Provider,
    method: Method,
    base_url: String,
    path_and_query: String,
    headers: HeaderMap,
    body: Bytes,
}

impl UpstreamRequestBuilder {
    /// Upstream base URL, without trailing slash
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Upstream path, plus the inbound query string if there is one
    pub fn path(mut self, path: &str, query: Option<&str>) -> Self {
        self.path_and_query = match query {
            Some(q) if !q.is_empty() => format!("{}?{}", path, q),
            _ => path.to_string(),
        };
        self
    }

    /// Headers of the inbound request, copied into a fresh map
    pub fn inbound_headers(mut self, incoming: &HeaderMap) -> Self {
        self.headers = copy_request_headers(incoming);
        self
    }

    pub fn body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }

    /// Attach credentials and produce the request.
    ///
    /// Fails with a configuration error when the key cannot be carried in a
    /// header value.
    pub fn build(self, api_key: &str) -> AppResult<UpstreamRequest> {
        let Self {
            provider,
            method,
            base_url,
            path_and_query,
            mut headers,
            body,
        } = self;

        match provider {
            Provider::OpenAi => {
                let value = credential(provider, &format!("Bearer {}", api_key))?;
                headers.insert(header::AUTHORIZATION, value);
            }
            Provider::Anthropic => {
                headers.insert(X_API_KEY, credential(provider, api_key)?);
                headers.insert(
                    ANTHROPIC_VERSION_HEADER,
                    HeaderValue::from_static(ANTHROPIC_VERSION),
                );
            }
        }

        // GET and HEAD never carry a body upstream
        let body = if method == Method::GET || method == Method::HEAD {
            None
        } else {
            Some(body)
        };

        Ok(UpstreamRequest {
            method,
            url: format!("{}{}", base_url, path_and_query),
            headers,
            body,
        })
    }
}

fn credential(provider: Provider, raw: &str) -> AppResult<HeaderValue> {
    let mut value = HeaderValue::from_str(raw).map_err(|_| {
        ProxyError::Configuration(format!(
            "{} contains characters that are not valid in an HTTP header",
            provider.api_key_var()
        ))
    })?;
    value.set_sensitive(true);
    Ok(value)
}
