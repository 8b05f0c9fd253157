//! XP account state machine: totals, level derivation, streak upkeep, and
//! achievement candidate evaluation.
//!
//! The machine has two entry points with different contracts:
//!
//! - [`apply_grant`] — a user-initiated XP grant. Runs the full pipeline:
//!   totals, level, streak update, achievement candidate evaluation.
//! - [`apply_reward`] — an achievement-reward payout. Touches totals and
//!   level only. Reward grants must never use [`apply_grant`], which bounds
//!   the award cascade to exactly one hop (grant -> achievement -> reward,
//!   stop) by construction rather than by a recursion flag.

use chrono::NaiveDate;
use serde::Serialize;

use crate::achievements::{streak_tier, AchievementKind};

/// XP needed per level. Level is always `total_xp / 1000 + 1`.
pub const XP_PER_LEVEL: i64 = 1000;

/// Derive the level from a running XP total.
pub fn level_for_xp(total_xp: i64) -> i32 {
    (total_xp / XP_PER_LEVEL) as i32 + 1
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// In-memory snapshot of one user's XP account.
///
/// `level` is derived state: every mutation recomputes it from `total_xp`
/// via [`level_for_xp`] and is never set independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpState {
    pub total_xp: i64,
    pub level: i32,
    pub streak_days: i32,
    pub last_activity_date: Option<NaiveDate>,
}

impl XpState {
    /// Fresh account: zero XP, level 1, no streak, never active.
    pub fn new() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            streak_days: 0,
            last_activity_date: None,
        }
    }
}

impl Default for XpState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Streak
// ---------------------------------------------------------------------------

/// What happened to the streak on a given activity day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// First ever activity, or the streak was broken by a gap of 2+ days.
    Started,
    /// Activity on the day after the previous one.
    Extended,
    /// Repeat activity on the same day.
    Unchanged,
}

/// Apply the streak rules for an activity on `today`.
///
/// - unset or a gap of 2+ days: streak restarts at 1
/// - last activity exactly yesterday: streak increments
/// - last activity already today: streak unchanged
///
/// `last_activity_date` becomes `today` unconditionally.
pub fn update_streak(state: &mut XpState, today: NaiveDate) -> StreakChange {
    let yesterday = today.pred_opt().expect("date out of range");

    let change = match state.last_activity_date {
        None => {
            state.streak_days = 1;
            StreakChange::Started
        }
        Some(last) if last < yesterday => {
            state.streak_days = 1;
            StreakChange::Started
        }
        Some(last) if last == yesterday => {
            state.streak_days += 1;
            StreakChange::Extended
        }
        // last == today: multiple activities on one day do not inflate the streak.
        Some(_) => StreakChange::Unchanged,
    };

    state.last_activity_date = Some(today);
    change
}

// ---------------------------------------------------------------------------
// Grants
// ---------------------------------------------------------------------------

/// Result of a user-initiated XP grant.
#[derive(Debug, Clone)]
pub struct GrantOutcome {
    /// The account state after the grant (before any reward payouts).
    pub state: XpState,
    /// Whether this grant crossed a level boundary.
    pub leveled_up: bool,
    /// What the grant did to the streak.
    pub streak: StreakChange,
    /// Achievements this grant qualifies for, in award order. Whether each
    /// is actually granted is decided by the (idempotent) persistence layer.
    pub award_candidates: Vec<AchievementKind>,
}

/// Apply a user-initiated XP grant: totals, level, streak, and achievement
/// candidate evaluation.
///
/// `amount` is assumed validated (non-negative) at the boundary.
pub fn apply_grant(mut state: XpState, amount: i64, today: NaiveDate) -> GrantOutcome {
    state.total_xp += amount;

    let new_level = level_for_xp(state.total_xp);
    let leveled_up = new_level > state.level;
    state.level = new_level;

    let streak = update_streak(&mut state, today);

    let award_candidates = achievement_candidates(leveled_up, state.streak_days);

    GrantOutcome {
        state,
        leveled_up,
        streak,
        award_candidates,
    }
}

/// Apply an achievement-reward payout: totals and level only.
///
/// No streak update and no achievement evaluation happen here, so a reward
/// that itself crosses a level boundary or lands on a streak tier cannot
/// spawn further awards.
pub fn apply_reward(mut state: XpState, amount: i64) -> XpState {
    state.total_xp += amount;
    state.level = level_for_xp(state.total_xp);
    state
}

/// Evaluate which achievements a completed grant qualifies for.
///
/// A level-up candidate comes first, then at most one streak tier: the one
/// whose value equals the current streak exactly.
pub fn achievement_candidates(leveled_up: bool, streak_days: i32) -> Vec<AchievementKind> {
    let mut candidates = Vec::new();
    if leveled_up {
        candidates.push(AchievementKind::LevelUp);
    }
    if let Some(tier) = streak_tier(streak_days) {
        candidates.push(tier);
    }
    candidates
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- level_for_xp --

    #[test]
    fn level_derivation_boundaries() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(999), 1);
        assert_eq!(level_for_xp(1000), 2);
        assert_eq!(level_for_xp(1999), 2);
        assert_eq!(level_for_xp(2000), 3);
        assert_eq!(level_for_xp(10_000), 11);
    }

    // -- update_streak --

    #[test]
    fn streak_starts_at_one_on_first_activity() {
        let mut state = XpState::new();
        let today = day(2025, 6, 10);
        assert_eq!(update_streak(&mut state, today), StreakChange::Started);
        assert_eq!(state.streak_days, 1);
        assert_eq!(state.last_activity_date, Some(today));
    }

    #[test]
    fn streak_increments_after_consecutive_day() {
        let mut state = XpState {
            streak_days: 5,
            last_activity_date: Some(day(2025, 6, 9)),
            ..XpState::new()
        };
        assert_eq!(
            update_streak(&mut state, day(2025, 6, 10)),
            StreakChange::Extended
        );
        assert_eq!(state.streak_days, 6);
    }

    #[test]
    fn streak_resets_after_gap() {
        let mut state = XpState {
            streak_days: 12,
            last_activity_date: Some(day(2025, 6, 7)),
            ..XpState::new()
        };
        assert_eq!(
            update_streak(&mut state, day(2025, 6, 10)),
            StreakChange::Started
        );
        assert_eq!(state.streak_days, 1);
    }

    #[test]
    fn streak_unchanged_on_same_day() {
        let today = day(2025, 6, 10);
        let mut state = XpState {
            streak_days: 4,
            last_activity_date: Some(today),
            ..XpState::new()
        };
        assert_eq!(update_streak(&mut state, today), StreakChange::Unchanged);
        assert_eq!(state.streak_days, 4);
        assert_eq!(state.last_activity_date, Some(today));
    }

    // -- apply_grant --

    #[test]
    fn grant_accumulates_and_recomputes_level() {
        let outcome = apply_grant(XpState::new(), 250, day(2025, 6, 10));
        assert_eq!(outcome.state.total_xp, 250);
        assert_eq!(outcome.state.level, 1);
        assert!(!outcome.leveled_up);
    }

    #[test]
    fn grant_crossing_boundary_flags_level_up() {
        let state = XpState {
            total_xp: 900,
            level: 1,
            ..XpState::new()
        };
        let outcome = apply_grant(state, 150, day(2025, 6, 10));
        assert_eq!(outcome.state.total_xp, 1050);
        assert_eq!(outcome.state.level, 2);
        assert!(outcome.leveled_up);
        assert_eq!(outcome.award_candidates, vec![AchievementKind::LevelUp]);
    }

    #[test]
    fn grant_runs_streak_update() {
        let state = XpState {
            streak_days: 2,
            last_activity_date: Some(day(2025, 6, 9)),
            ..XpState::new()
        };
        let outcome = apply_grant(state, 10, day(2025, 6, 10));
        assert_eq!(outcome.streak, StreakChange::Extended);
        assert_eq!(outcome.state.streak_days, 3);
        // Streak landed exactly on tier 3.
        assert_eq!(outcome.award_candidates, vec![AchievementKind::Streak3]);
    }

    #[test]
    fn grant_can_qualify_for_level_up_and_streak_tier_together() {
        let state = XpState {
            total_xp: 950,
            level: 1,
            streak_days: 6,
            last_activity_date: Some(day(2025, 6, 9)),
        };
        let outcome = apply_grant(state, 100, day(2025, 6, 10));
        assert!(outcome.leveled_up);
        assert_eq!(outcome.state.streak_days, 7);
        assert_eq!(
            outcome.award_candidates,
            vec![AchievementKind::LevelUp, AchievementKind::Streak7]
        );
    }

    #[test]
    fn grant_off_tier_streak_yields_no_streak_candidate() {
        let state = XpState {
            streak_days: 3,
            last_activity_date: Some(day(2025, 6, 9)),
            ..XpState::new()
        };
        let outcome = apply_grant(state, 10, day(2025, 6, 10));
        assert_eq!(outcome.state.streak_days, 4);
        assert!(outcome.award_candidates.is_empty());
    }

    #[test]
    fn zero_amount_grant_still_counts_as_activity() {
        let outcome = apply_grant(XpState::new(), 0, day(2025, 6, 10));
        assert_eq!(outcome.state.total_xp, 0);
        assert_eq!(outcome.state.streak_days, 1);
        assert_eq!(outcome.streak, StreakChange::Started);
    }

    // -- apply_reward --

    #[test]
    fn reward_updates_totals_and_level_only() {
        let state = XpState {
            total_xp: 100,
            level: 1,
            streak_days: 2,
            last_activity_date: Some(day(2025, 6, 9)),
        };
        let rewarded = apply_reward(state, 200);
        assert_eq!(rewarded.total_xp, 300);
        assert_eq!(rewarded.level, 1);
        // Streak state is untouched by reward payouts.
        assert_eq!(rewarded.streak_days, 2);
        assert_eq!(rewarded.last_activity_date, Some(day(2025, 6, 9)));
    }

    #[test]
    fn reward_crossing_boundary_raises_level_without_candidates() {
        let state = XpState {
            total_xp: 950,
            level: 1,
            ..XpState::new()
        };
        let rewarded = apply_reward(state, 200);
        assert_eq!(rewarded.total_xp, 1150);
        // Level is still derived state, even on the reward path.
        assert_eq!(rewarded.level, 2);
        // apply_reward returns no candidates by type: there is nothing more
        // to award. This is the cascade bound.
    }

    // -- cascade boundedness (pure-state rendition of the full flow) --

    #[test]
    fn cascade_is_bounded_to_one_hop() {
        // Grant that triggers both a level-up and streak tier 3.
        let state = XpState {
            total_xp: 990,
            level: 1,
            streak_days: 2,
            last_activity_date: Some(day(2025, 6, 9)),
        };
        let outcome = apply_grant(state, 50, day(2025, 6, 10));
        assert_eq!(
            outcome.award_candidates,
            vec![AchievementKind::LevelUp, AchievementKind::Streak3]
        );

        // Pay out both rewards through apply_reward.
        let mut settled = outcome.state;
        for kind in &outcome.award_candidates {
            settled = apply_reward(settled, kind.xp_reward());
        }

        // base 990 + 50 grant + 200 level-up + 100 streak-3
        assert_eq!(settled.total_xp, 1340);
        assert_eq!(settled.level, 2);
        // The rewards moved neither the streak nor the activity date, and
        // apply_reward produces no candidates, so the cascade ends here.
        assert_eq!(settled.streak_days, 3);
        assert_eq!(settled.last_activity_date, Some(day(2025, 6, 10)));
    }
}
