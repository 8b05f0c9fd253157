//! Learning and notification preference models and DTOs.

use lingo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `learning_preferences` table.
///
/// `preferred_lesson_types` and `weak_areas` are JSONB lists; older
/// clients have written junk entries into them, so consumers coerce via
/// `lingo_core::recommendation::string_list` rather than deserializing
/// into `Vec<String>`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LearningPreferences {
    pub id: DbId,
    pub user_id: DbId,
    pub target_language: String,
    pub current_level: Option<String>,
    pub learning_goal: Option<String>,
    pub daily_goal_minutes: i32,
    pub preferred_lesson_types: serde_json::Value,
    pub weak_areas: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting learning preferences (all fields optional).
#[derive(Debug, Deserialize)]
pub struct UpdateLearningPreferences {
    pub target_language: Option<String>,
    pub current_level: Option<String>,
    pub learning_goal: Option<String>,
    pub daily_goal_minutes: Option<i32>,
    pub preferred_lesson_types: Option<serde_json::Value>,
    pub weak_areas: Option<serde_json::Value>,
}

/// A row from the `notification_preferences` table.
///
/// `channel_overrides` maps notification type -> EMAIL | PUSH | BOTH;
/// types without an entry route as BOTH.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationPreferences {
    pub id: DbId,
    pub user_id: DbId,
    pub email_enabled: bool,
    pub push_enabled: bool,
    pub channel_overrides: serde_json::Value,
    /// UTC hour at which scheduled reminders fire for this user.
    pub preferred_hour: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting notification preferences.
#[derive(Debug, Deserialize)]
pub struct UpdateNotificationPreferences {
    pub email_enabled: Option<bool>,
    pub push_enabled: Option<bool>,
    pub channel_overrides: Option<serde_json::Value>,
    pub preferred_hour: Option<i16>,
}
