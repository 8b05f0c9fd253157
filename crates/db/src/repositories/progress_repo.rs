//! Repository for the `lesson_progress` table.
//!
//! Both write paths are upserts keyed on (user, lesson). The score merge
//! uses `GREATEST` so a stored score can only rise, and `last_attempted`
//! is refreshed on every mutation.

use lingo_core::progress::COMPLETION_SCORE;
use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::LessonProgress;

/// Column list for `lesson_progress` queries.
const COLUMNS: &str = "id, user_id, lesson_id, completed, score, last_attempted, created_at";

/// Provides progress recording and listing per user.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Mark a lesson complete: `completed = true`, score pinned to 100.
    pub async fn mark_complete(
        pool: &PgPool,
        user_id: DbId,
        lesson_id: DbId,
    ) -> Result<LessonProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO lesson_progress (user_id, lesson_id, completed, score) \
             VALUES ($1, $2, TRUE, $3) \
             ON CONFLICT (user_id, lesson_id) DO UPDATE SET \
                 completed = TRUE, \
                 score = GREATEST(lesson_progress.score, EXCLUDED.score), \
                 last_attempted = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(user_id)
            .bind(lesson_id)
            .bind(COMPLETION_SCORE)
            .fetch_one(pool)
            .await
    }

    /// Record a score for a lesson without forcing completion.
    ///
    /// The stored score becomes `max(current, score)`.
    pub async fn raise_score(
        pool: &PgPool,
        user_id: DbId,
        lesson_id: DbId,
        score: i32,
    ) -> Result<LessonProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO lesson_progress (user_id, lesson_id, score) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, lesson_id) DO UPDATE SET \
                 score = GREATEST(lesson_progress.score, EXCLUDED.score), \
                 last_attempted = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(user_id)
            .bind(lesson_id)
            .bind(score)
            .fetch_one(pool)
            .await
    }

    /// All progress rows for a user.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<LessonProgress>, sqlx::Error> {
        Self::list_filtered(pool, user_id, None).await
    }

    /// Completed lessons only.
    pub async fn list_completed(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<LessonProgress>, sqlx::Error> {
        Self::list_filtered(pool, user_id, Some(true)).await
    }

    /// Started-but-unfinished lessons only.
    pub async fn list_in_progress(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<LessonProgress>, sqlx::Error> {
        Self::list_filtered(pool, user_id, Some(false)).await
    }

    async fn list_filtered(
        pool: &PgPool,
        user_id: DbId,
        completed: Option<bool>,
    ) -> Result<Vec<LessonProgress>, sqlx::Error> {
        let filter = match completed {
            Some(true) => "AND completed = TRUE",
            Some(false) => "AND completed = FALSE",
            None => "",
        };
        let query = format!(
            "SELECT {COLUMNS} FROM lesson_progress \
             WHERE user_id = $1 {filter} \
             ORDER BY last_attempted DESC"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Number of lessons the user has completed.
    pub async fn completed_count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM lesson_progress WHERE user_id = $1 AND completed = TRUE",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
