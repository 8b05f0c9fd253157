//! Route definitions for the XP account resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::xp;
use crate::state::AppState;

/// Routes mounted at `/xp`.
///
/// ```text
/// GET  /              -> get_account
/// POST /              -> grant_xp
/// GET  /leaderboard   -> leaderboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(xp::get_account).post(xp::grant_xp))
        .route("/leaderboard", get(xp::leaderboard))
}
