//! XP account models and DTOs.

use chrono::NaiveDate;
use lingo_core::gamification::XpState;
use lingo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `xp_accounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct XpAccount {
    pub id: DbId,
    pub user_id: DbId,
    pub total_xp: i64,
    pub level: i32,
    pub streak_days: i32,
    pub last_activity_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl XpAccount {
    /// The pure-domain view of this row, for running state transitions.
    pub fn state(&self) -> XpState {
        XpState {
            total_xp: self.total_xp,
            level: self.level,
            streak_days: self.streak_days,
            last_activity_date: self.last_activity_date,
        }
    }
}

/// DTO for a user-initiated XP grant.
#[derive(Debug, Deserialize)]
pub struct GrantXp {
    pub amount: i64,
}
