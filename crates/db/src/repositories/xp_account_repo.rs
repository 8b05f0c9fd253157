//! Repository for the `xp_accounts` table.
//!
//! Accounts are created lazily: the first XP-related interaction for a
//! user materializes the row. Grant processing pins the row with
//! `SELECT ... FOR UPDATE` so concurrent grants for the same user are
//! serialized; grants for different users never contend.

use lingo_core::gamification::XpState;
use lingo_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::xp_account::XpAccount;

/// Column list for `xp_accounts` queries.
const COLUMNS: &str =
    "id, user_id, total_xp, level, streak_days, last_activity_date, created_at, updated_at";

/// Provides access to per-user XP accounts.
pub struct XpAccountRepo;

impl XpAccountRepo {
    /// Get the account for a user, creating it on first interaction.
    pub async fn get_or_create(pool: &PgPool, user_id: DbId) -> Result<XpAccount, sqlx::Error> {
        let query = format!(
            "INSERT INTO xp_accounts (user_id) \
             VALUES ($1) \
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, XpAccount>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Get the account for a user without creating one.
    pub async fn find(pool: &PgPool, user_id: DbId) -> Result<Option<XpAccount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM xp_accounts WHERE user_id = $1");
        sqlx::query_as::<_, XpAccount>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Get-or-create the account and lock its row for the duration of the
    /// surrounding transaction.
    ///
    /// The lock serializes read-modify-write of `total_xp`/`level`/
    /// `streak_days` per user. Must be called inside a transaction.
    pub async fn lock_for_grant(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<XpAccount, sqlx::Error> {
        sqlx::query("INSERT INTO xp_accounts (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id)
            .execute(&mut *conn)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM xp_accounts WHERE user_id = $1 FOR UPDATE");
        sqlx::query_as::<_, XpAccount>(&query)
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Persist a computed account state onto the locked row.
    pub async fn save_state(
        conn: &mut PgConnection,
        user_id: DbId,
        state: &XpState,
    ) -> Result<XpAccount, sqlx::Error> {
        let query = format!(
            "UPDATE xp_accounts \
             SET total_xp = $2, level = $3, streak_days = $4, last_activity_date = $5, \
                 updated_at = NOW() \
             WHERE user_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, XpAccount>(&query)
            .bind(user_id)
            .bind(state.total_xp)
            .bind(state.level)
            .bind(state.streak_days)
            .bind(state.last_activity_date)
            .fetch_one(&mut *conn)
            .await
    }

    /// Top accounts by total XP, for the leaderboard.
    pub async fn leaderboard(pool: &PgPool, limit: i64) -> Result<Vec<XpAccount>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM xp_accounts \
             ORDER BY total_xp DESC, id ASC \
             LIMIT $1"
        );
        sqlx::query_as::<_, XpAccount>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
