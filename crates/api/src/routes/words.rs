//! Route definitions for word-of-the-day.

use axum::routing::get;
use axum::Router;

use crate::handlers::words;
use crate::state::AppState;

/// Routes mounted at `/words-of-the-day`.
pub fn router() -> Router<AppState> {
    Router::new().route("/today", get(words::today))
}
