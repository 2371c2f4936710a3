//! Axum router configuration.

use std::sync::Arc;

use axum::{extract::OriginalUri, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{health, shell, spec};
use crate::error::ProblemDetails;
use crate::shell::ShellPage;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub shell: Arc<ShellPage>,
}

/// Fallback for unknown routes.
async fn not_found(OriginalUri(uri): OriginalUri) -> ProblemDetails {
    ProblemDetails::not_found(format!("no route for {}", uri.path())).with_instance(uri.path())
}

/// Create the router for the documentation shell.
pub fn create_router(shell: Arc<ShellPage>) -> Router {
    let state = AppState { shell };

    Router::new()
        .route("/", get(shell::shell_page))
        .route("/openapi.json", get(spec::bundled_spec))
        .route("/health", get(health::health_check))
        .fallback(not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
