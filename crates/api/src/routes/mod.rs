pub mod achievements;
pub mod courses;
pub mod health;
pub mod notifications;
pub mod preferences;
pub mod progress;
pub mod pronunciation;
pub mod recommendations;
pub mod words;
pub mod xp;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /xp                                   grant (POST), account snapshot (GET)
/// /xp/leaderboard                       top accounts by XP
///
/// /achievements                         granted achievements, newest first
///
/// /courses                              course catalog
/// /courses/{id}                         course detail
/// /courses/{id}/lessons                 lessons in course order
/// /lessons/{id}                         lesson detail
/// /lessons/{id}/complete                mark complete (POST)
/// /lessons/{id}/progress                raise score (POST)
///
/// /progress                             all progress rows
/// /progress/completed                   completed lessons
/// /progress/in-progress                 started but unfinished
///
/// /recommendations                      stored set from last generation
/// /recommendations/generate             full regenerate (POST)
///
/// /preferences                          learning preferences (GET, PUT)
/// /preferences/notifications            notification preferences (GET, PUT)
///
/// /notifications                        list (GET)
/// /notifications/{id}/read              mark one read (POST)
/// /notifications/read-all               mark all read (POST)
/// /notifications/unread-count           unread badge count
///
/// /words-of-the-day/today               today's word (204 when none)
///
/// /pronunciation/exercises              list by lesson (GET)
/// /pronunciation/exercises/{id}/attempts submit attempt (POST)
/// /pronunciation/attempts               own attempts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/xp", xp::router())
        .nest("/achievements", achievements::router())
        .merge(courses::router())
        .merge(progress::router())
        .nest("/recommendations", recommendations::router())
        .nest("/preferences", preferences::router())
        .nest("/notifications", notifications::router())
        .nest("/words-of-the-day", words::router())
        .nest("/pronunciation", pronunciation::router())
}
