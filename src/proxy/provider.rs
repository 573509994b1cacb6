//! Upstream providers
//!
//! The proxy knows two upstreams. Each one owns its route prefix, the way
//! the inbound path maps to an upstream path, and how credentials are
//! attached.

use std::fmt;

/// Anthropic API version sent with every Anthropic request
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// An upstream AI provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    Anthropic,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::OpenAi, Provider::Anthropic];

    /// Provider name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
        }
    }

    /// Inbound path prefix that routes to this provider
    pub fn route_prefix(&self) -> &'static str {
        match self {
            Provider::OpenAi => "/v1/",
            Provider::Anthropic => "/anthropic/",
        }
    }

    /// Route pattern advertised by the health endpoint
    pub fn route_pattern(&self) -> &'static str {
        match self {
            Provider::OpenAi => "/v1/*",
            Provider::Anthropic => "/anthropic/*",
        }
    }

    /// Environment variable holding this provider's API key
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    /// Match an inbound path against the provider prefixes.
    ///
    /// Returns the provider and the path to request upstream. OpenAI paths
    /// are forwarded as-is; Anthropic paths lose their `/anthropic` prefix.
    pub fn match_path(path: &str) -> Option<(Provider, &str)> {
        if path.starts_with(Provider::OpenAi.route_prefix()) {
            return Some((Provider::OpenAi, path));
        }
        if path.starts_with(Provider::Anthropic.route_prefix()) {
            return Some((Provider::Anthropic, &path["/anthropic".len()..]));
        }
        None
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
