//! The XP grant pipeline.
//!
//! A grant runs inside a single transaction holding a row lock on the
//! user's XP account, so concurrent grants for one user serialize while
//! different users proceed in parallel:
//!
//! 1. lock (get-or-create) the account row
//! 2. run the pure grant transition (`apply_grant`)
//! 3. for each award candidate, attempt the idempotent achievement insert;
//!    first-time grants pay out through `apply_reward` (totals/level only,
//!    never another award evaluation, so the cascade stops after one hop)
//! 4. persist the settled state and commit
//! 5. publish the accumulated events after the commit sticks

use lingo_core::gamification::{apply_grant, apply_reward, StreakChange};
use lingo_core::types::DbId;
use lingo_db::models::achievement::Achievement;
use lingo_db::models::xp_account::XpAccount;
use lingo_db::repositories::{AchievementRepo, XpAccountRepo};
use lingo_db::DbPool;
use lingo_events::bus::{
    EventBus, LearningEvent, EVENT_ACHIEVEMENT_GRANTED, EVENT_LEVEL_UP, EVENT_STREAK_EXTENDED,
};

use crate::error::AppResult;

/// Outcome of a processed grant, for the HTTP response and logging.
#[derive(Debug)]
pub struct GrantResult {
    /// The settled account row (base grant plus any reward payouts).
    pub account: XpAccount,
    /// Achievements granted for the first time by this call.
    pub granted: Vec<Achievement>,
    /// Whether the base grant crossed a level boundary.
    pub leveled_up: bool,
    /// What the grant did to the streak.
    pub streak: StreakChange,
}

/// Process a user-initiated XP grant.
///
/// `amount` must already be validated non-negative at the boundary.
pub async fn grant_xp(
    pool: &DbPool,
    bus: &EventBus,
    user_id: DbId,
    amount: i64,
) -> AppResult<GrantResult> {
    let today = chrono::Utc::now().date_naive();

    let mut tx = pool.begin().await?;

    let account = XpAccountRepo::lock_for_grant(&mut tx, user_id).await?;
    let outcome = apply_grant(account.state(), amount, today);

    // Award cascade: idempotent insert per candidate; only first-time
    // grants pay out, via the totals/level-only entry point.
    let mut state = outcome.state.clone();
    let mut granted = Vec::new();
    for kind in &outcome.award_candidates {
        let record =
            AchievementRepo::try_grant(&mut tx, user_id, kind.as_str(), kind.xp_reward()).await?;
        if let Some(record) = record {
            state = apply_reward(state, record.xp_reward);
            granted.push(record);
        }
    }

    let account = XpAccountRepo::save_state(&mut tx, user_id, &state).await?;
    tx.commit().await?;

    tracing::info!(
        user_id,
        amount,
        total_xp = account.total_xp,
        level = account.level,
        streak_days = account.streak_days,
        awards = granted.len(),
        "XP grant processed",
    );

    // Events go out only after the transaction commits.
    if outcome.leveled_up {
        bus.publish(
            LearningEvent::new(EVENT_LEVEL_UP, user_id).with_payload(serde_json::json!({
                "level": account.level,
                "total_xp": account.total_xp,
            })),
        );
    }
    if outcome.streak == StreakChange::Extended {
        bus.publish(
            LearningEvent::new(EVENT_STREAK_EXTENDED, user_id)
                .with_payload(serde_json::json!({ "streak_days": account.streak_days })),
        );
    }
    for achievement in &granted {
        bus.publish(
            LearningEvent::new(EVENT_ACHIEVEMENT_GRANTED, user_id).with_payload(
                serde_json::json!({
                    "kind": achievement.kind,
                    "xp_reward": achievement.xp_reward,
                }),
            ),
        );
    }

    Ok(GrantResult {
        account,
        granted,
        leveled_up: outcome.leveled_up,
        streak: outcome.streak,
    })
}
