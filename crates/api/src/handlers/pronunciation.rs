//! Handlers for pronunciation exercises and attempts.
//!
//! Submitting an attempt stores the row first and then asks the speech
//! provider for transcript/feedback. Provider trouble is stored on the
//! attempt; the request itself still succeeds.

use axum::extract::{Path, Query, State};
use axum::Json;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;
use lingo_db::models::pronunciation::{CreateAttempt, PronunciationAttempt, PronunciationExercise};
use lingo_db::repositories::PronunciationRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::services::pronunciation;
use crate::state::AppState;

/// Query parameters for listing exercises.
#[derive(Debug, Deserialize)]
pub struct ExerciseQuery {
    pub lesson_id: DbId,
}

/// GET /api/v1/pronunciation/exercises?lesson_id=
pub async fn list_exercises(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ExerciseQuery>,
) -> AppResult<Json<DataResponse<Vec<PronunciationExercise>>>> {
    let exercises = PronunciationRepo::exercises_for_lesson(&state.pool, params.lesson_id).await?;
    Ok(Json(DataResponse { data: exercises }))
}

/// POST /api/v1/pronunciation/exercises/{id}/attempts
///
/// Record an attempt against an exercise and annotate it with
/// transcript, accuracy, and feedback (best-effort).
pub async fn create_attempt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(exercise_id): Path<DbId>,
    Json(input): Json<CreateAttempt>,
) -> AppResult<Json<DataResponse<PronunciationAttempt>>> {
    let exercise = PronunciationRepo::get_exercise(&state.pool, exercise_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PronunciationExercise",
            id: exercise_id,
        }))?;

    let attempt = PronunciationRepo::create_attempt(
        &state.pool,
        auth.user_id,
        exercise_id,
        &input.audio_url,
    )
    .await?;

    let annotated = pronunciation::annotate_attempt(
        &state.pool,
        state.speech.as_deref(),
        &exercise,
        &attempt,
    )
    .await?;

    Ok(Json(DataResponse { data: annotated }))
}

/// GET /api/v1/pronunciation/attempts
pub async fn list_attempts(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PronunciationAttempt>>>> {
    let attempts = PronunciationRepo::list_attempts_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: attempts }))
}
