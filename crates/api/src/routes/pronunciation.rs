//! Route definitions for pronunciation practice.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pronunciation;
use crate::state::AppState;

/// Routes mounted at `/pronunciation`.
///
/// ```text
/// GET  /exercises                  -> list_exercises (?lesson_id=)
/// POST /exercises/{id}/attempts    -> create_attempt
/// GET  /attempts                   -> list_attempts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(pronunciation::list_exercises))
        .route(
            "/exercises/{id}/attempts",
            post(pronunciation::create_attempt),
        )
        .route("/attempts", get(pronunciation::list_attempts))
}
