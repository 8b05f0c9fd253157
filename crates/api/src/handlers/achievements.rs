//! Handlers for the `/achievements` resource.

use axum::extract::State;
use axum::Json;
use lingo_db::models::achievement::Achievement;
use lingo_db::repositories::AchievementRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/achievements
///
/// The authenticated user's granted achievements, newest first.
pub async fn list_achievements(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Achievement>>>> {
    let achievements = AchievementRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: achievements }))
}
