//! Handlers for lesson recommendations.

use axum::extract::{Query, State};
use axum::Json;
use lingo_db::models::recommendation::LessonRecommendation;
use lingo_db::repositories::RecommendationRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::services::recommendation;
use crate::state::AppState;

/// How many recommendations to surface by default.
const DEFAULT_LIMIT: i64 = 5;

/// Upper bound on a requested recommendation page.
const MAX_LIMIT: i64 = 50;

/// POST /api/v1/recommendations/generate
///
/// Regenerate the authenticated user's recommendation set (full replace)
/// and return the top entries.
pub async fn generate(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<LessonRecommendation>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let recommendations = recommendation::generate_for_user(
        &state.pool,
        &state.event_bus,
        auth.user_id,
        limit as usize,
    )
    .await?;
    Ok(Json(DataResponse {
        data: recommendations,
    }))
}

/// GET /api/v1/recommendations
///
/// The stored recommendation set from the most recent generation run.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<LessonRecommendation>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let recommendations =
        RecommendationRepo::list_for_user(&state.pool, auth.user_id, limit).await?;
    Ok(Json(DataResponse {
        data: recommendations,
    }))
}
