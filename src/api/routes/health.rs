//! Health endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::warn;

use crate::api::server::AppState;

/// GET /api/health — liveness plus template and cache counts.
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let store = state.engine.store();
    let entries = match store.count().await {
        Ok(n) => Some(n),
        Err(e) => {
            warn!(error = %e, "Failed to count cached definitions");
            None
        }
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "language_pairs": state.engine.prompts().len(),
        "cache": {
            "backend": store.name(),
            "entries": entries,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::server::test_support::offline_state;

    #[tokio::test]
    async fn test_get_health_returns_ok() {
        let state = Arc::new(offline_state(50));
        state.engine.store().insert("en-zh:cat", "{}").await.unwrap();
        let Json(body) = get_health(State(state)).await;
        assert_eq!(body["status"], "ok");
        assert!(body["version"].is_string());
        assert_eq!(body["language_pairs"], 2);
        assert_eq!(body["cache"]["backend"], "memory");
        assert_eq!(body["cache"]["entries"], 1);
    }
}
