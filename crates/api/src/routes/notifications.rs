//! Route definitions for the notifications resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET  /                -> list_notifications
/// POST /{id}/read       -> mark_read
/// POST /read-all        -> mark_all_read
/// GET  /unread-count    -> unread_count
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::list_notifications))
        .route("/{id}/read", post(notifications::mark_read))
        .route("/read-all", post(notifications::mark_all_read))
        .route("/unread-count", get(notifications::unread_count))
}
