//! Repository for the `learning_preferences` table.

use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::preferences::{LearningPreferences, UpdateLearningPreferences};

/// Column list for `learning_preferences` queries.
const COLUMNS: &str = "id, user_id, target_language, current_level, learning_goal, \
                       daily_goal_minutes, preferred_lesson_types, weak_areas, \
                       created_at, updated_at";

/// Provides per-user learning preference access.
pub struct PreferenceRepo;

impl PreferenceRepo {
    /// Get the user's learning preferences, if any have been saved.
    pub async fn get_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<LearningPreferences>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM learning_preferences WHERE user_id = $1");
        sqlx::query_as::<_, LearningPreferences>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the user's learning preferences.
    ///
    /// Fields left as `None` keep their current (or default) value.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateLearningPreferences,
    ) -> Result<LearningPreferences, sqlx::Error> {
        let query = format!(
            "INSERT INTO learning_preferences \
                 (user_id, target_language, current_level, learning_goal, daily_goal_minutes, \
                  preferred_lesson_types, weak_areas) \
             VALUES ($1, COALESCE($2, ''), $3, $4, COALESCE($5, 15), \
                     COALESCE($6, '[]'::jsonb), COALESCE($7, '[]'::jsonb)) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 target_language = COALESCE($2, learning_preferences.target_language), \
                 current_level = COALESCE($3, learning_preferences.current_level), \
                 learning_goal = COALESCE($4, learning_preferences.learning_goal), \
                 daily_goal_minutes = COALESCE($5, learning_preferences.daily_goal_minutes), \
                 preferred_lesson_types = COALESCE($6, learning_preferences.preferred_lesson_types), \
                 weak_areas = COALESCE($7, learning_preferences.weak_areas), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LearningPreferences>(&query)
            .bind(user_id)
            .bind(&input.target_language)
            .bind(&input.current_level)
            .bind(&input.learning_goal)
            .bind(input.daily_goal_minutes)
            .bind(&input.preferred_lesson_types)
            .bind(&input.weak_areas)
            .fetch_one(pool)
            .await
    }
}
