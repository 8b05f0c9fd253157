use std::sync::Arc;

use lingo_events::EventBus;
use lingo_speech::SpeechClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lingo_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Event bus consumed by the notification dispatcher.
    pub event_bus: Arc<EventBus>,
    /// Speech-feedback provider client; `None` when not configured, in
    /// which case attempts are annotated with a not-configured message.
    pub speech: Option<Arc<SpeechClient>>,
}
