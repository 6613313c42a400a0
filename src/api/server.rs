//! Axum HTTP server for the dictionary API.

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::render::GoldenDictRenderer;
use crate::lookup::LookupEngine;

/// Shared state for all handlers. Everything in here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Cache-first lookup pipeline.
    pub engine: Arc<LookupEngine>,
    /// HTML renderer for `/golden-dict`.
    pub renderer: Arc<GoldenDictRenderer>,
    /// Maximum accepted word length, in characters.
    pub max_input_chars: usize,
}

impl AppState {
    pub fn new(
        engine: Arc<LookupEngine>,
        renderer: Arc<GoldenDictRenderer>,
        max_input_chars: usize,
    ) -> Self {
        Self {
            engine,
            renderer,
            max_input_chars,
        }
    }
}

/// Build the router. Paths not matched by an API route fall through to
/// `static_dir` when one is given.
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let shared_state = Arc::new(state);

    let api = Router::new()
        .route("/api/config", get(super::routes::config::get_config))
        .route("/api/lookup", get(super::routes::lookup::lookup))
        .route("/api/health", get(super::routes::health::get_health))
        .route("/golden-dict", get(super::routes::golden_dict::golden_dict))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    if let Some(dir) = static_dir {
        api.fallback_service(ServeDir::new(dir))
    } else {
        api
    }
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn start_server(
    addr: &str,
    state: AppState,
    static_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = build_router(state, static_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
