//! JSON lookup route.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::warn;

use crate::api::server::AppState;
use crate::config::check_word_length;
use crate::error::{DictError, Result};

pub(crate) const MISSING_PARAMS: &str = "Missing required parameters (word, source, target)";

/// `GET /api/lookup` query string.
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    pub word: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
}

impl LookupParams {
    /// `(word, source, target)`, all present and non-empty.
    pub fn into_parts(self) -> Result<(String, String, String)> {
        match (self.word, self.source, self.target) {
            (Some(w), Some(s), Some(t)) if !w.is_empty() && !s.is_empty() && !t.is_empty() => {
                Ok((w, s, t))
            }
            _ => Err(DictError::InvalidRequest(MISSING_PARAMS.into())),
        }
    }
}

/// HTTP status for a lookup error.
pub(crate) fn status_for(err: &DictError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn error_response(err: &DictError) -> Response {
    (status_for(err), err.to_string()).into_response()
}

/// GET /api/lookup?word=&source=&target= — raw definition JSON.
pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupParams>,
) -> Response {
    let (word, source, target) = match params.into_parts() {
        Ok(parts) => parts,
        Err(e) => return error_response(&e),
    };
    if let Err(e) = check_word_length(&word, state.max_input_chars) {
        return error_response(&e);
    }

    match state.engine.get_definition(&word, &source, &target).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => {
            warn!(word = %word, source = %source, target = %target, error = %e, "Lookup failed");
            error_response(&e)
        }
    }
}
