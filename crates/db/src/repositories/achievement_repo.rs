//! Repository for the `achievements` table.

use lingo_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::achievement::Achievement;

/// Column list for `achievements` queries.
const COLUMNS: &str = "id, user_id, kind, xp_reward, granted_at";

/// Provides idempotent achievement grants and listing.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Grant an achievement to a user if they do not already hold it.
    ///
    /// Returns the new record on first grant, `None` when the user already
    /// holds this kind. The `uq_achievements_user_kind` constraint makes the
    /// grant idempotent; the duplicate case is absorbed, not an error, so
    /// repeated attempts never pay out twice.
    pub async fn try_grant(
        conn: &mut PgConnection,
        user_id: DbId,
        kind: &str,
        xp_reward: i64,
    ) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!(
            "INSERT INTO achievements (user_id, kind, xp_reward) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, kind) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(user_id)
            .bind(kind)
            .bind(xp_reward)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List a user's achievements, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM achievements \
             WHERE user_id = $1 \
             ORDER BY granted_at DESC, id DESC"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
