//! Repository for the `lesson_recommendations` table.
//!
//! The per-user set is replaced wholesale on each generation run. This is
//! deliberately non-incremental: a crash mid-replace leaves a partial or
//! stale set that the next run corrects.

use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::recommendation::{LessonRecommendation, NewRecommendation};

/// Column list for `lesson_recommendations` queries.
const COLUMNS: &str = "id, user_id, lesson_id, score, reason, created_at";

/// Provides bulk replacement and listing of lesson recommendations.
pub struct RecommendationRepo;

impl RecommendationRepo {
    /// Discard the user's current recommendation set and store a new one.
    ///
    /// Returns the inserted rows ordered by descending score.
    pub async fn replace_for_user(
        pool: &PgPool,
        user_id: DbId,
        entries: &[NewRecommendation],
    ) -> Result<Vec<LessonRecommendation>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM lesson_recommendations WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO lesson_recommendations (user_id, lesson_id, score, reason) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );

        let mut inserted = Vec::with_capacity(entries.len());
        for entry in entries {
            let row = sqlx::query_as::<_, LessonRecommendation>(&insert)
                .bind(user_id)
                .bind(entry.lesson_id)
                .bind(entry.score)
                .bind(&entry.reason)
                .fetch_one(&mut *tx)
                .await?;
            inserted.push(row);
        }

        tx.commit().await?;

        inserted.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(inserted)
    }

    /// The user's current recommendations, best first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<LessonRecommendation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lesson_recommendations \
             WHERE user_id = $1 \
             ORDER BY score DESC, id ASC \
             LIMIT $2"
        );
        sqlx::query_as::<_, LessonRecommendation>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
