//! Static host for the Artifact Keep client bundle.
//!
//! Serves the compiled WASM app and forwards `/api/*` to the external
//! backend so the browser talks same-origin. Owns no persistence, auth, or
//! validation — those live in the backend.

mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env();
    tracing::info!(
        addr = %config.addr,
        backend = %config.backend_url,
        site_root = %config.site_root.display(),
        "artifact host starting"
    );

    let state = state::AppState::new(config.clone());
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server failed");
}
