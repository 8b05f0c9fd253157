//! Handlers for word-of-the-day lookup.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lingo_db::repositories::WordOfTheDayRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/words-of-the-day/today
///
/// Today's word. Returns 204 when no word is scheduled for today.
pub async fn today(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let word = WordOfTheDayRepo::for_date(&state.pool, today).await?;

    match word {
        Some(word) => Ok(Json(DataResponse { data: word }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
