//! Route definitions for the achievements resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::achievements;
use crate::state::AppState;

/// Routes mounted at `/achievements`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(achievements::list_achievements))
}
