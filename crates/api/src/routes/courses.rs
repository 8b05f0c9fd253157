//! Route definitions for the course catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Catalog routes (mounted at the API root; lesson write routes live in
/// the progress router).
///
/// ```text
/// GET /courses                -> list_courses
/// GET /courses/{id}           -> get_course
/// GET /courses/{id}/lessons   -> list_course_lessons
/// GET /lessons/{id}           -> get_lesson
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(courses::list_courses))
        .route("/courses/{id}", get(courses::get_course))
        .route("/courses/{id}/lessons", get(courses::list_course_lessons))
        .route("/lessons/{id}", get(courses::get_lesson))
}
