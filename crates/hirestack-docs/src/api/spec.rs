//! Bundled API description, served for tools that want it by URL.

use axum::{extract::State, Json};
use serde_json::Value;

use super::router::AppState;
use crate::error::ProblemDetails;

/// GET /openapi.json
pub async fn bundled_spec(State(state): State<AppState>) -> Result<Json<Value>, ProblemDetails> {
    match state.shell.source().as_bundled() {
        Some(spec) => Ok(Json(spec.document().clone())),
        None => Err(ProblemDetails::not_found(
            "API description is served remotely; see the configured spec URL",
        )
        .with_instance("/openapi.json")),
    }
}
