//! Capability discovery for front ends.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::server::AppState;

/// GET /api/config — input limit and supported `source -> [targets]` pairs.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "max_input_chars": state.max_input_chars,
        "available_pairs": state.engine.prompts().available_pairs(),
    }))
}
