//! Documentation page.

use axum::{extract::State, response::Html};

use super::router::AppState;

/// GET /
pub async fn shell_page(State(state): State<AppState>) -> Html<String> {
    Html(state.shell.render())
}
