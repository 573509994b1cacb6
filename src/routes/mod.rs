//! HTTP routes for the proxy
//!
//! Every request goes through one dispatcher that classifies it by method
//! and path prefix. OPTIONS is answered by the CORS middleware before it
//! gets here.

pub mod forward;
pub mod health;

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::Method,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::{error::ProxyError, middleware::cors::cors_middleware, proxy::Provider, AppState};

/// What a request resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind<'a> {
    Health,
    Forward {
        provider: Provider,
        upstream_path: &'a str,
    },
    NotFound,
}

/// Classify a request by method and path
pub fn classify<'a>(method: &Method, path: &'a str) -> RouteKind<'a> {
    if *method == Method::GET && (path == "/" || path == "/health") {
        return RouteKind::Health;
    }

    match Provider::match_path(path) {
        Some((provider, upstream_path)) => RouteKind::Forward {
            provider,
            upstream_path,
        },
        None => RouteKind::NotFound,
    }
}

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn dispatch(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let path = request.uri().path().to_string();

    match classify(request.method(), &path) {
        RouteKind::Health => health::health_check().await.into_response(),
        RouteKind::Forward {
            provider,
            upstream_path,
        } => forward::forward(state, provider, upstream_path.to_string(), request)
            .await
            .into_response(),
        RouteKind::NotFound => {
            debug!(method = %request.method(), path = %path, "No route matched");
            ProxyError::NotFound { path: path.clone() }.into_response()
        }
    }
}
