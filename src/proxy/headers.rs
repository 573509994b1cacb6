//! Header utilities for provider proxying
//!
//! Inbound headers are copied into a fresh map for the upstream request.
//! Hop-by-hop headers and `Host` never cross the proxy.

use axum::http::header::{self, HeaderMap, HeaderName};

/// Hop-by-hop headers that must never be forwarded
const HOP_BY_HOP_HEADERS: &[HeaderName] = &[
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Check if a header is a hop-by-hop header that should not be forwarded
pub fn is_hop_by_hop_header(name: &HeaderName) -> bool {
    HOP_BY_HOP_HEADERS.contains(name) || name.as_str() == "keep-alive"
}

/// Copy inbound request headers for forwarding.
///
/// `Host` is dropped so the upstream never sees the proxy's own host name.
/// `Content-Length` is dropped because the client recomputes it from the
/// buffered body.
pub fn copy_request_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(incoming.len());

    for (name, value) in incoming {
        if *name == header::HOST || *name == header::CONTENT_LENGTH || is_hop_by_hop_header(name) {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }

    headers
}

/// Filter hop-by-hop headers from an upstream response
pub fn filter_response_headers(response_headers: &HeaderMap) -> HeaderMap {
    let mut filtered = HeaderMap::with_capacity(response_headers.len());

    for (name, value) in response_headers {
        if !is_hop_by_hop_header(name) {
            filtered.append(name.clone(), value.clone());
        }
    }

    filtered
}
