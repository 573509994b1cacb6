//! Request logging utilities for provider proxying
//!
//! Gives each forwarded request a short correlation id so the start,
//! upstream response and failure lines can be tied together.

use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::proxy::Provider;

/// Context for tracking a forwarded request
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    pub provider: Provider,
    /// HTTP method of the inbound request
    pub method: String,
    /// Upstream path being called
    pub endpoint: String,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider: Provider, method: &str, endpoint: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            provider,
            method: method.to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    pub fn log_request_start(&self) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            method = %self.method,
            endpoint = %self.endpoint,
            "Forwarding request"
        );
    }

    /// Log request being sent to upstream
    pub fn log_upstream_request(&self, url: &str, header_count: usize, body_size: Option<usize>) {
        debug!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            url = %url,
            header_count = %header_count,
            body_size = ?body_size,
            "Sending request to upstream"
        );
    }

    /// Log response received from upstream
    pub fn log_upstream_response(&self, status: u16, content_length: Option<u64>) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            status = %status,
            content_length = ?content_length,
            elapsed_ms = %self.elapsed_ms(),
            "Response received from upstream"
        );
    }

    /// Log a request rejected before any network call
    pub fn log_not_configured(&self) {
        warn!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            variable = %self.provider.api_key_var(),
            "Provider API key is not configured"
        );
    }

    /// Log connection error
    pub fn log_connection_error(&self, error: &str, url: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            url = %url,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Connection to upstream failed"
        );
    }
}
