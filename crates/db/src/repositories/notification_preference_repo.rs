//! Repository for the `notification_preferences` table.

use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::preferences::{NotificationPreferences, UpdateNotificationPreferences};

/// Column list for `notification_preferences` queries.
const COLUMNS: &str = "id, user_id, email_enabled, push_enabled, channel_overrides, \
                       preferred_hour, created_at, updated_at";

/// Provides per-user notification preference access.
pub struct NotificationPreferenceRepo;

impl NotificationPreferenceRepo {
    /// Get the user's notification preferences, if any have been saved.
    ///
    /// Absent preferences mean defaults: both channels enabled, every
    /// notification type routed to both.
    pub async fn get_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<NotificationPreferences>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notification_preferences WHERE user_id = $1");
        sqlx::query_as::<_, NotificationPreferences>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the user's notification preferences.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateNotificationPreferences,
    ) -> Result<NotificationPreferences, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_preferences \
                 (user_id, email_enabled, push_enabled, channel_overrides, preferred_hour) \
             VALUES ($1, COALESCE($2, TRUE), COALESCE($3, TRUE), \
                     COALESCE($4, '{{}}'::jsonb), COALESCE($5, 9)) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 email_enabled = COALESCE($2, notification_preferences.email_enabled), \
                 push_enabled = COALESCE($3, notification_preferences.push_enabled), \
                 channel_overrides = COALESCE($4, notification_preferences.channel_overrides), \
                 preferred_hour = COALESCE($5, notification_preferences.preferred_hour), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NotificationPreferences>(&query)
            .bind(user_id)
            .bind(input.email_enabled)
            .bind(input.push_enabled)
            .bind(&input.channel_overrides)
            .bind(input.preferred_hour)
            .fetch_one(pool)
            .await
    }

    /// Users whose reminder hour matches the given UTC hour.
    ///
    /// The reminder scheduler calls this once per tick.
    pub async fn list_users_for_hour(
        pool: &PgPool,
        utc_hour: i16,
    ) -> Result<Vec<NotificationPreferences>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notification_preferences \
             WHERE preferred_hour = $1 AND (email_enabled OR push_enabled)"
        );
        sqlx::query_as::<_, NotificationPreferences>(&query)
            .bind(utc_hour)
            .fetch_all(pool)
            .await
    }
}
