//! Proxy module
//!
//! Handles request forwarding to the upstream AI providers.

pub mod client;
pub mod headers;
pub mod logging;
pub mod provider;
pub mod request;

pub use client::{Inbound, UpstreamClient};
pub use provider::{Provider, ANTHROPIC_VERSION};
pub use request::UpstreamRequest;
