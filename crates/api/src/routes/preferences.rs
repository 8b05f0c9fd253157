//! Route definitions for user preferences.

use axum::routing::get;
use axum::Router;

use crate::handlers::preferences;
use crate::state::AppState;

/// Routes mounted at `/preferences`.
///
/// ```text
/// GET /                 -> get_learning
/// PUT /                 -> update_learning
/// GET /notifications    -> get_notifications
/// PUT /notifications    -> update_notifications
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(preferences::get_learning).put(preferences::update_learning),
        )
        .route(
            "/notifications",
            get(preferences::get_notifications).put(preferences::update_notifications),
        )
}
