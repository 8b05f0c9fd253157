//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameter for list endpoints that support a result cap
/// (`?limit=`). Defaults and upper bounds are applied at the handler.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
