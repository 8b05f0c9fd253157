//! Route definitions for lesson progress.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Progress routes (mounted at the API root so the lesson write routes
/// sit next to the catalog's `/lessons/{id}`).
///
/// ```text
/// POST /lessons/{id}/complete   -> complete_lesson
/// POST /lessons/{id}/progress   -> update_progress
/// GET  /progress                -> list_progress
/// GET  /progress/completed      -> list_completed
/// GET  /progress/in-progress    -> list_in_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lessons/{id}/complete", post(progress::complete_lesson))
        .route("/lessons/{id}/progress", post(progress::update_progress))
        .route("/progress", get(progress::list_progress))
        .route("/progress/completed", get(progress::list_completed))
        .route("/progress/in-progress", get(progress::list_in_progress))
}
