//! Granted achievement models.

use lingo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `achievements` table.
///
/// `xp_reward` is the catalog value captured at grant time; it is never
/// re-read from the catalog afterwards. `granted_at` is immutable.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub user_id: DbId,
    pub kind: String,
    pub xp_reward: i64,
    pub granted_at: Timestamp,
}
