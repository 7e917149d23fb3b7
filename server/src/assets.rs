use axum::{extract::State, http::StatusCode, response::Html};

use crate::state::AppState;

/// GET / and GET /index.html: serve the client page.
/// Read from disk on every request.
pub async fn serve_index(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    match tokio::fs::read_to_string(&state.index_html).await {
        Ok(html) => Ok(Html(html)),
        Err(err) => {
            tracing::error!(
                path = %state.index_html.display(),
                error = %err,
                "failed to read client page"
            );
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Error loading index.html"))
        }
    }
}

/// Fallback for every other path.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
