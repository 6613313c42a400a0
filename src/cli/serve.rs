//! `aidict serve`: run the HTTP server.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use aidict::api::{start_server, AppState, GoldenDictRenderer};

use super::common::{build_engine, load_config};

pub(crate) async fn cmd_serve(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let engine = Arc::new(build_engine(&config, true).await?);

    let renderer = GoldenDictRenderer::load(config.server.template.as_deref())
        .context("Failed to load GoldenDict template")?;

    let static_dir = config.server.static_dir.clone().filter(|dir| {
        if dir.is_dir() {
            true
        } else {
            warn!(dir = %dir.display(), "Static directory not found; serving API only");
            false
        }
    });
    if let Some(dir) = &static_dir {
        info!(dir = %dir.display(), "Serving static files");
    }

    let state = AppState::new(engine, Arc::new(renderer), config.validation.max_chars());
    start_server(&config.server.addr(), state, static_dir)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
