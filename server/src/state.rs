use std::path::PathBuf;
use std::sync::Arc;

use crate::relay::registry::RelayRegistry;

/// Shared application state passed to all handlers via axum State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Client registrations and broadcast fan-out.
    pub registry: Arc<RelayRegistry>,
    /// Path of the client page served at `/` and `/index.html`.
    pub index_html: PathBuf,
}
