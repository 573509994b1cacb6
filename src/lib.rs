//! DVCCC API Proxy
//!
//! A stateless reverse proxy that lets browser clients call OpenAI and
//! Anthropic without holding provider secrets. Requests are classified by
//! path prefix, credentials are attached server-side, and every response
//! carries a permissive CORS header set.

pub mod config;
pub mod error;
pub mod middleware;
pub mod proxy;
pub mod routes;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppResult, ProxyError};
pub use crate::proxy::{Provider, UpstreamClient};
pub use crate::routes::create_router;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    /// Forwarding client; holds the connection pool
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // No request timeout: upstream calls run until they finish or fail
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        Ok(Self::with_client(config, http_client))
    }

    /// Create application state around an existing HTTP client
    pub fn with_client(config: Config, http_client: reqwest::Client) -> Self {
        let upstream = UpstreamClient::new(http_client, config.clone());
        Self { config, upstream }
    }
}
