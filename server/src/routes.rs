//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router: `/api/*` relays to the external backend, everything
//! else serves the built client bundle with an `index.html` fallback so
//! client-side routes deep-link correctly.

use axum::Router;
use axum::routing::{any, get};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::proxy;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let index = state.config.site_root.join("index.html");
    let site = ServeDir::new(&state.config.site_root).fallback(ServeFile::new(index));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/{*path}", any(proxy::forward))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}
