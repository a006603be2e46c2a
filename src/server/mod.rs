use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use crate::tracker::Tracker;

pub mod page;
pub mod routes;

/// Server state
pub struct AppState {
    pub tracker: Tracker,
}

/// Every route of the web UI and its JSON side door
pub fn router(tracker: Tracker) -> Router {
    let state = Arc::new(AppState { tracker });

    Router::new()
        .route("/", get(routes::index))
        .route("/fetch", post(routes::fetch))
        .route("/candidates/{id}/status", post(routes::save_status))
        .route("/export", post(routes::export))
        .route("/api/candidates", get(routes::list_candidates))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(host: &str, port: u16, tracker: Tracker) -> anyhow::Result<()> {
    let app = router(tracker);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Resume Tracker running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
