//! Handlers for learning and notification preferences.

use axum::extract::State;
use axum::Json;
use lingo_db::models::preferences::{
    LearningPreferences, NotificationPreferences, UpdateLearningPreferences,
    UpdateNotificationPreferences,
};
use lingo_db::repositories::{NotificationPreferenceRepo, PreferenceRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/preferences
///
/// The authenticated user's learning preferences. Users who never saved
/// any get a default row created on first read, mirroring the lazy
/// get-or-create semantics of the XP account.
pub async fn get_learning(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<LearningPreferences>>> {
    let prefs = match PreferenceRepo::get_for_user(&state.pool, auth.user_id).await? {
        Some(prefs) => prefs,
        None => {
            let defaults = UpdateLearningPreferences {
                target_language: None,
                current_level: None,
                learning_goal: None,
                daily_goal_minutes: None,
                preferred_lesson_types: None,
                weak_areas: None,
            };
            PreferenceRepo::upsert(&state.pool, auth.user_id, &defaults).await?
        }
    };
    Ok(Json(DataResponse { data: prefs }))
}

/// PUT /api/v1/preferences
pub async fn update_learning(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateLearningPreferences>,
) -> AppResult<Json<DataResponse<LearningPreferences>>> {
    if let Some(minutes) = input.daily_goal_minutes {
        if minutes < 0 {
            return Err(AppError::BadRequest(
                "Daily goal minutes cannot be negative".into(),
            ));
        }
    }

    let prefs = PreferenceRepo::upsert(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, "Learning preferences updated");
    Ok(Json(DataResponse { data: prefs }))
}

/// GET /api/v1/preferences/notifications
pub async fn get_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<NotificationPreferences>>> {
    let prefs = match NotificationPreferenceRepo::get_for_user(&state.pool, auth.user_id).await? {
        Some(prefs) => prefs,
        None => {
            let defaults = UpdateNotificationPreferences {
                email_enabled: None,
                push_enabled: None,
                channel_overrides: None,
                preferred_hour: None,
            };
            NotificationPreferenceRepo::upsert(&state.pool, auth.user_id, &defaults).await?
        }
    };
    Ok(Json(DataResponse { data: prefs }))
}

/// PUT /api/v1/preferences/notifications
pub async fn update_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateNotificationPreferences>,
) -> AppResult<Json<DataResponse<NotificationPreferences>>> {
    if let Some(hour) = input.preferred_hour {
        if !(0..=23).contains(&hour) {
            return Err(AppError::BadRequest(
                "Preferred hour must be between 0 and 23".into(),
            ));
        }
    }

    let prefs = NotificationPreferenceRepo::upsert(&state.pool, auth.user_id, &input).await?;
    Ok(Json(DataResponse { data: prefs }))
}
