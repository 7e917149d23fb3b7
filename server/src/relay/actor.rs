use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::relay::{protocol, ConnectionId};
use crate::state::AppState;

/// Run the actor-per-connection pattern for an accepted WebSocket.
///
/// Splits the WebSocket into reader and writer halves:
/// - Writer task: owns the sink, forwards messages from an mpsc channel
/// - Reader loop: parses incoming frames and dispatches them to the registry
///
/// The mpsc sender is what the registry stores per client; cloning it lets
/// any broadcast push events to this connection.
pub async fn run_connection(socket: WebSocket, state: AppState) {
    let (ws_sender, mut ws_receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel::<Message>();
    let connection = ConnectionId::next();

    tracing::info!(connection = %connection, "client connected");

    let writer_handle = tokio::spawn(writer_task(ws_sender, rx));

    // Reader loop: process incoming WebSocket messages
    loop {
        match ws_receiver.next().await {
            Some(Ok(msg)) => match msg {
                Message::Text(text) => {
                    protocol::handle_text_message(
                        text.as_str(),
                        &state.registry,
                        connection,
                        &tx,
                    );
                }
                Message::Binary(data) => {
                    // Protocol is JSON text; binary frames carry nothing.
                    tracing::debug!(
                        connection = %connection,
                        len = data.len(),
                        "ignoring binary frame"
                    );
                }
                Message::Ping(data) => {
                    let _ = tx.send(Message::Pong(data));
                }
                Message::Pong(_) => {}
                Message::Close(frame) => {
                    tracing::info!(
                        connection = %connection,
                        reason = ?frame,
                        "client initiated close"
                    );
                    break;
                }
            },
            Some(Err(err)) => {
                tracing::warn!(
                    connection = %connection,
                    error = %err,
                    "WebSocket receive error"
                );
                break;
            }
            None => {
                // Stream ended — client disconnected
                tracing::info!(connection = %connection, "WebSocket stream ended");
                break;
            }
        }
    }

    // Cleanup: stop the writer, then let the registry drop this client and
    // clear its touches everywhere.
    writer_handle.abort();
    state.registry.handle_disconnect(connection);

    tracing::info!(connection = %connection, "client disconnected");
}

/// Writer task: receives messages from the mpsc channel and forwards them to
/// the WebSocket sink.
async fn writer_task(
    mut ws_sender: futures_util::stream::SplitSink<WebSocket, Message>,
    mut rx: mpsc::UnboundedReceiver<Message>,
) {
    while let Some(msg) = rx.recv().await {
        if ws_sender.send(msg).await.is_err() {
            // WebSocket send failed — connection is broken
            break;
        }
    }
}
