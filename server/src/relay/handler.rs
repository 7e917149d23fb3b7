use axum::{
    extract::{ws::WebSocketUpgrade, State},
    response::Response,
};

use crate::relay::actor;
use crate::state::AppState;

/// GET /ws
/// WebSocket upgrade endpoint. Connections are anonymous; a client only
/// becomes visible to others once it registers by sending a touchUpdate.
pub async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| actor::run_connection(socket, state))
}
