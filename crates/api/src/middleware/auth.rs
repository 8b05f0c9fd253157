//! Authenticated-user extractor.
//!
//! Request authentication itself lives with the upstream gateway, which
//! verifies credentials and forwards the caller's identity in the
//! `x-user-id` header. [`AuthUser`] extracts that identity and rejects
//! requests where the header is missing or malformed with 401.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Header the auth gateway sets on verified requests.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user for the current request.
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     let user_id = auth.user_id;
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<DbId>().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing or invalid user identity header".into(),
                ))
            })?;

        Ok(AuthUser { user_id })
    }
}
