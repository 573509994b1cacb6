//! Configuration management for the proxy
//!
//! Configuration is loaded once from environment variables and handed to the
//! router at construction time. Request handlers never read the environment.

use anyhow::{bail, Context, Result};
use std::env;

use crate::proxy::Provider;

/// Default OpenAI base URL (paths are appended verbatim)
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com";
/// Default Anthropic base URL
pub const DEFAULT_ANTHROPIC_API_URL: &str = "https://api.anthropic.com";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// OpenAI API base URL, without trailing slash
    pub openai_api_url: String,
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Anthropic API base URL, without trailing slash
    pub anthropic_api_url: String,
    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` is this with the process environment; tests pass a map so
    /// they never touch global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("Invalid LOG_FORMAT '{}': expected 'text' or 'json'", other),
        };

        Ok(Self {
            host: lookup("PROXY_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PROXY_PORT")
                .unwrap_or_else(|| "8787".to_string())
                .parse()
                .context("Invalid PROXY_PORT")?,

            openai_api_url: base_url(lookup("OPENAI_API_URL"), DEFAULT_OPENAI_API_URL),
            openai_api_key: secret(lookup("OPENAI_API_KEY")),

            anthropic_api_url: base_url(lookup("ANTHROPIC_API_URL"), DEFAULT_ANTHROPIC_API_URL),
            anthropic_api_key: secret(lookup("ANTHROPIC_API_KEY")),

            log_format,
        })
    }

    /// API key configured for a provider, if any
    pub fn api_key(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::OpenAi => self.openai_api_key.as_deref(),
            Provider::Anthropic => self.anthropic_api_key.as_deref(),
        }
    }

    /// Upstream base URL for a provider
    pub fn base_url(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAi => &self.openai_api_url,
            Provider::Anthropic => &self.anthropic_api_url,
        }
    }
}

// Empty secrets behave like unset ones.
fn secret(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn base_url(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}
