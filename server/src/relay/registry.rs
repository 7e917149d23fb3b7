//! Connection registry and broadcast fan-out.
//!
//! Maps each client-chosen id to the connection it first registered on plus
//! its announced color. Inbound events are relayed to every other registered
//! client; a disconnect removes the departed client and tells everyone else
//! to clear its touches.

use axum::extract::ws::Message;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde_json::Value;

use super::protocol::ServerEvent;
use super::{ConnectionId, ConnectionSender};

/// State tracked per registered client.
#[derive(Debug)]
pub struct ClientRecord {
    /// Token of the connection the client first registered on. Never updated
    /// afterwards, even if the same clientId later sends from a new
    /// connection; the old record stays until that exact connection closes.
    pub connection: ConnectionId,
    /// Channel into the connection's writer task.
    pub sender: ConnectionSender,
    /// Color announced at registration. Broadcasts forward the color carried
    /// by the triggering event, not this stored one.
    pub color: Value,
}

/// The relay registry: client-chosen id → registered connection and color.
///
/// One instance per server, shared by every connection actor. All mutation
/// goes through the three event handlers below.
#[derive(Debug, Default)]
pub struct RelayRegistry {
    clients: DashMap<String, ClientRecord>,
}

impl RelayRegistry {
    pub fn new() -> Self {
        Self {
            clients: DashMap::new(),
        }
    }

    /// Handle an inbound `touchUpdate`.
    ///
    /// Registers the clientId on first sight (first registration wins), then
    /// relays the event verbatim to every other open client.
    pub fn handle_touch_update(
        &self,
        client_id: &str,
        color: Option<Value>,
        touches: Option<Value>,
        connection: ConnectionId,
        sender: &ConnectionSender,
    ) {
        if let Entry::Vacant(entry) = self.clients.entry(client_id.to_string()) {
            let color_value = color.clone().unwrap_or(Value::Null);
            tracing::info!(
                client_id = %client_id,
                connection = %connection,
                color = %color_value,
                "client registered"
            );
            entry.insert(ClientRecord {
                connection,
                sender: sender.clone(),
                color: color_value,
            });
        }

        self.broadcast(
            Some(client_id),
            &ServerEvent::TouchUpdate {
                client_id: client_id.to_string(),
                color,
                touches,
            },
        );
    }

    /// Handle an inbound `clearTouches`: relay it to everyone else.
    /// The sender stays registered.
    pub fn handle_clear_touches(&self, client_id: &str) {
        self.broadcast(
            Some(client_id),
            &ServerEvent::ClearTouches {
                client_id: client_id.to_string(),
            },
        );
    }

    /// Handle a closed connection.
    ///
    /// Finds the client registered on exactly this connection, removes it,
    /// and tells every remaining client to clear its touches. A connection
    /// that never registered leaves the registry untouched.
    pub fn handle_disconnect(&self, connection: ConnectionId) {
        let departed = self
            .clients
            .iter()
            .find(|entry| entry.value().connection == connection)
            .map(|entry| entry.key().clone());

        let Some(client_id) = departed else {
            return;
        };

        if let Some((_, record)) = self.clients.remove(&client_id) {
            tracing::info!(
                client_id = %client_id,
                connection = %connection,
                color = %record.color,
                "client removed"
            );
        }

        // Everyone left drops the departed client's touches. No exclusion,
        // the sender is already gone.
        self.broadcast(None, &ServerEvent::ClearTouches { client_id });
    }

    /// Send an event to every registered client except `exclude`, skipping
    /// records whose connection is no longer open. One recipient failing
    /// never aborts the rest of the fan-out.
    fn broadcast(&self, exclude: Option<&str>, event: &ServerEvent) {
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize outbound event");
                return;
            }
        };

        for entry in self.clients.iter() {
            if exclude == Some(entry.key().as_str()) {
                continue;
            }
            let record = entry.value();
            if record.sender.is_closed() {
                // Stale record: its close event has not fired yet. Removal
                // belongs to the disconnect handler.
                continue;
            }
            if record.sender.send(Message::Text(json.clone().into())).is_err() {
                tracing::debug!(client_id = %entry.key(), "send to client failed");
            }
        }
    }
}
