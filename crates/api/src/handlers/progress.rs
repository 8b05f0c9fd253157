//! Handlers for lesson progress recording and listing.

use axum::extract::{Path, State};
use axum::Json;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;
use lingo_db::models::progress::{LessonProgress, UpdateScore};
use lingo_db::repositories::{CourseRepo, ProgressRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/lessons/{id}/complete
///
/// Mark a lesson complete for the authenticated user: `completed = true`,
/// score pinned to 100.
pub async fn complete_lesson(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(lesson_id): Path<DbId>,
) -> AppResult<Json<DataResponse<LessonProgress>>> {
    ensure_lesson_exists(&state, lesson_id).await?;

    let progress = ProgressRepo::mark_complete(&state.pool, auth.user_id, lesson_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        lesson_id,
        score = progress.score,
        "Lesson marked complete",
    );

    Ok(Json(DataResponse { data: progress }))
}

/// POST /api/v1/lessons/{id}/progress
///
/// Record a score for a lesson without forcing completion. The stored
/// score never decreases; negative scores are rejected with 400.
pub async fn update_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(lesson_id): Path<DbId>,
    Json(input): Json<UpdateScore>,
) -> AppResult<Json<DataResponse<LessonProgress>>> {
    if input.score < 0 {
        return Err(AppError::BadRequest("Score cannot be negative".into()));
    }

    ensure_lesson_exists(&state, lesson_id).await?;

    let progress =
        ProgressRepo::raise_score(&state.pool, auth.user_id, lesson_id, input.score).await?;

    Ok(Json(DataResponse { data: progress }))
}

/// GET /api/v1/progress
pub async fn list_progress(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LessonProgress>>>> {
    let rows = ProgressRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/progress/completed
pub async fn list_completed(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LessonProgress>>>> {
    let rows = ProgressRepo::list_completed(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/progress/in-progress
pub async fn list_in_progress(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LessonProgress>>>> {
    let rows = ProgressRepo::list_in_progress(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// 404 unless the lesson exists (progress rows should never point at
/// nothing; the FK would reject it with a 500 otherwise).
async fn ensure_lesson_exists(state: &AppState, lesson_id: DbId) -> AppResult<()> {
    if CourseRepo::get_lesson(&state.pool, lesson_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: lesson_id,
        }));
    }
    Ok(())
}
