//! Same-origin forwarding of `/api/*` requests to the external backend.
//!
//! DESIGN
//! ======
//! Requests are buffered and replayed rather than streamed; artifact file
//! uploads are small and buffering keeps the handler simple. Hop-by-hop
//! headers are dropped in both directions.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Upload ceiling for buffered request bodies.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Error produced while relaying a request to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body could not be read: {0}")]
    Body(#[from] axum::Error),
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy failure");
        (StatusCode::BAD_GATEWAY, "backend unavailable").into_response()
    }
}

const HOP_HEADERS: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

fn is_hop_header(name: &str) -> bool {
    HOP_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Copy end-to-end headers, keeping repeated values such as `Set-Cookie`.
fn relay_headers(source: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in source {
        if !is_hop_header(name.as_str()) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Join the backend base URL with the incoming path and query.
fn backend_target(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Relay one request to the backend and return its response verbatim.
///
/// # Errors
///
/// Returns [`ProxyError`] when the body cannot be buffered or the backend
/// is unreachable; it renders as `502 Bad Gateway`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ProxyError> {
    let path_and_query = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());
    let target = backend_target(&state.config.backend_url, path_and_query);

    let bytes = to_bytes(body, MAX_BODY_BYTES).await?;
    let upstream = state
        .http
        .request(method, &target)
        .headers(relay_headers(&headers))
        .body(bytes)
        .send()
        .await?;
    let status = upstream.status();
    let response_headers = relay_headers(upstream.headers());
    let body_bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(body_bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
