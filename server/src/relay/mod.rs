pub mod actor;
pub mod handler;
pub mod protocol;
pub mod registry;

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;

/// Type alias for the sender half of a WebSocket connection's channel.
/// The registry clones this to push outbound events to a specific client.
pub type ConnectionSender = mpsc::UnboundedSender<axum::extract::ws::Message>;

/// Opaque token identifying one live WebSocket connection.
///
/// Allocated when the connection actor starts and stored in the registry on
/// first registration. Disconnect cleanup matches on this exact token, so a
/// stale record pointing at a dead connection is only ever removed by that
/// connection's own close event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Allocate the next token from a process-wide counter.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}
