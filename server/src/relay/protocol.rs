//! Wire protocol for the touch relay.
//!
//! Events are JSON text frames tagged by `type`. Frames the server cannot
//! parse are logged and dropped; recognizable frames with an unknown type are
//! ignored without comment.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::registry::RelayRegistry;
use super::{ConnectionId, ConnectionSender};

/// Events clients send to the server. `color` and `touches` are opaque to
/// the relay and forwarded untouched.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    #[serde(rename = "touchUpdate")]
    TouchUpdate {
        #[serde(rename = "clientId")]
        client_id: String,
        #[serde(default)]
        color: Option<Value>,
        #[serde(default)]
        touches: Option<Value>,
    },
    #[serde(rename = "clearTouches")]
    ClearTouches {
        #[serde(rename = "clientId")]
        client_id: String,
    },
    /// Any other tag.
    #[serde(other)]
    Unknown,
}

/// Events the server relays out. Absent fields stay absent on the wire.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    #[serde(rename = "touchUpdate")]
    TouchUpdate {
        #[serde(rename = "clientId")]
        client_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        touches: Option<Value>,
    },
    #[serde(rename = "clearTouches")]
    ClearTouches {
        #[serde(rename = "clientId")]
        client_id: String,
    },
}

/// Handle one inbound text frame: parse it and dispatch to the registry.
/// A parse failure discards the frame and leaves the connection alone.
pub fn handle_text_message(
    text: &str,
    registry: &RelayRegistry,
    connection: ConnectionId,
    sender: &ConnectionSender,
) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(err) => {
            tracing::warn!(
                connection = %connection,
                error = %err,
                "failed to parse message"
            );
            return;
        }
    };

    match event {
        ClientEvent::TouchUpdate {
            client_id,
            color,
            touches,
        } => {
            registry.handle_touch_update(&client_id, color, touches, connection, sender);
        }
        ClientEvent::ClearTouches { client_id } => {
            registry.handle_clear_touches(&client_id);
        }
        ClientEvent::Unknown => {
            tracing::debug!(connection = %connection, "ignoring unrecognized event type");
        }
    }
}
