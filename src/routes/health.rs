//! Health check endpoint
//!
//! `GET /` and `GET /health` report a fixed status and the routable
//! prefixes. No upstream is contacted.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::proxy::Provider;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "DVCCC API Proxy";

/// Health status
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

/// Route prefixes served by the proxy
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub openai: &'static str,
    pub anthropic: &'static str,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: &'static str,
    pub timestamp: String,
    pub endpoints: Endpoints,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            status: HealthStatus::Ok,
            service: SERVICE_NAME,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            endpoints: Endpoints {
                openai: Provider::OpenAi.route_pattern(),
                anthropic: Provider::Anthropic.route_pattern(),
            },
        }
    }
}

/// Health check handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}
