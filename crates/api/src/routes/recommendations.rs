//! Route definitions for lesson recommendations.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::recommendations;
use crate::state::AppState;

/// Routes mounted at `/recommendations`.
///
/// ```text
/// GET  /            -> list (stored set)
/// POST /generate    -> generate (full replace)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recommendations::list))
        .route("/generate", post(recommendations::generate))
}
