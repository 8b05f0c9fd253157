//! Handlers for the `/xp` resource: grants, account snapshot, leaderboard.

use axum::extract::{Query, State};
use axum::Json;
use lingo_db::models::xp_account::{GrantXp, XpAccount};
use lingo_db::repositories::XpAccountRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::services::gamification;
use crate::state::AppState;

/// Default leaderboard size.
const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;

/// Maximum leaderboard size.
const MAX_LEADERBOARD_LIMIT: i64 = 100;

/// POST /api/v1/xp
///
/// Grant XP to the authenticated user. Negative amounts are rejected with
/// 400 before the grant pipeline runs.
pub async fn grant_xp(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<GrantXp>,
) -> AppResult<Json<DataResponse<XpAccount>>> {
    if input.amount < 0 {
        return Err(AppError::BadRequest("Amount cannot be negative".into()));
    }

    let result =
        gamification::grant_xp(&state.pool, &state.event_bus, auth.user_id, input.amount).await?;

    Ok(Json(DataResponse {
        data: result.account,
    }))
}

/// GET /api/v1/xp
///
/// The authenticated user's XP account, created lazily on first access.
pub async fn get_account(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<XpAccount>>> {
    let account = XpAccountRepo::get_or_create(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: account }))
}

/// GET /api/v1/xp/leaderboard
///
/// Top XP accounts across all users, best first.
pub async fn leaderboard(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<XpAccount>>>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
        .clamp(1, MAX_LEADERBOARD_LIMIT);
    let accounts = XpAccountRepo::leaderboard(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: accounts }))
}
