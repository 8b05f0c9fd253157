//! Handlers for the course catalog (read-only for learners).

use axum::extract::{Path, State};
use axum::Json;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;
use lingo_db::models::course::{Course, Lesson};
use lingo_db::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/courses
pub async fn list_courses(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Course>>>> {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// GET /api/v1/courses/{id}
pub async fn get_course(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Course>>> {
    let course = CourseRepo::get(&state.pool, course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;
    Ok(Json(DataResponse { data: course }))
}

/// GET /api/v1/courses/{id}/lessons
pub async fn list_course_lessons(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Lesson>>>> {
    if CourseRepo::get(&state.pool, course_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }));
    }
    let lessons = CourseRepo::lessons_for_course(&state.pool, course_id).await?;
    Ok(Json(DataResponse { data: lessons }))
}

/// GET /api/v1/lessons/{id}
pub async fn get_lesson(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(lesson_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Lesson>>> {
    let lesson = CourseRepo::get_lesson(&state.pool, lesson_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: lesson_id,
        }))?;
    Ok(Json(DataResponse { data: lesson }))
}
