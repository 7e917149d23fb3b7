use axum::{routing::get, Router};

use crate::assets;
use crate::relay::handler as ws_handler;
use crate::state::AppState;

/// Build the full axum Router with all routes.
pub fn build_router(state: AppState) -> Router {
    // Client page
    let asset_routes = Router::new()
        .route("/", get(assets::serve_index))
        .route("/index.html", get(assets::serve_index));

    // WebSocket endpoint
    let ws_routes = Router::new().route("/ws", get(ws_handler::ws_upgrade));

    // Health check
    let health = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(asset_routes)
        .merge(ws_routes)
        .merge(health)
        .fallback(assets::not_found)
        .with_state(state)
}

/// Basic health check endpoint
async fn health_check() -> &'static str {
    "ok"
}
