use std::sync::Arc;

use telas_data::client::DataServiceClient;

use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable — everything is behind an `Arc`. None of it is
/// write-authoritative: the data service is the single source of truth and
/// every view re-reads it.
#[derive(Clone)]
pub struct AppState {
    /// Client for the external data service.
    pub data: Arc<DataServiceClient>,
    /// Server configuration (vocabulary, timeouts, cache path).
    pub config: Arc<ServerConfig>,
    /// The signed-in identity and its persisted cache.
    pub sessions: Arc<SessionStore>,
}
