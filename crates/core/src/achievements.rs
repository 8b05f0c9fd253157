//! Static achievement catalog.
//!
//! Achievement kinds and their XP rewards are fixed at compile time. The
//! reward is captured onto the granted record at grant time, so changing a
//! catalog value later never rewrites history.

use serde::{Deserialize, Serialize};

/// The kinds of achievement a user can earn.
///
/// Serialized in SCREAMING_SNAKE_CASE to match the values stored in the
/// `achievements.kind` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementKind {
    /// Crossed a level boundary on a user-initiated XP grant.
    LevelUp,
    /// Reached a 3-day activity streak.
    Streak3,
    /// Reached a 7-day activity streak.
    Streak7,
    /// Reached a 30-day activity streak.
    Streak30,
    /// Completed a first lesson. In the catalog for forward compatibility;
    /// not awarded by the current state machine.
    LessonComplete,
    /// Scored 100 on a lesson. In the catalog for forward compatibility;
    /// not awarded by the current state machine.
    PerfectScore,
}

impl AchievementKind {
    /// Stable string form used in the database and over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LevelUp => "LEVEL_UP",
            Self::Streak3 => "STREAK_3",
            Self::Streak7 => "STREAK_7",
            Self::Streak30 => "STREAK_30",
            Self::LessonComplete => "LESSON_COMPLETE",
            Self::PerfectScore => "PERFECT_SCORE",
        }
    }

    /// Parse the stable string form. Returns `None` for unknown kinds.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "LEVEL_UP" => Some(Self::LevelUp),
            "STREAK_3" => Some(Self::Streak3),
            "STREAK_7" => Some(Self::Streak7),
            "STREAK_30" => Some(Self::Streak30),
            "LESSON_COMPLETE" => Some(Self::LessonComplete),
            "PERFECT_SCORE" => Some(Self::PerfectScore),
            _ => None,
        }
    }

    /// Fixed XP reward paid out when this achievement is first granted.
    pub fn xp_reward(self) -> i64 {
        match self {
            Self::LevelUp => 200,
            Self::Streak3 => 100,
            Self::Streak7 => 300,
            Self::Streak30 => 1000,
            Self::LessonComplete => 50,
            Self::PerfectScore => 50,
        }
    }

    /// Human-readable title for notification messages.
    pub fn title(self) -> &'static str {
        match self {
            Self::LevelUp => "Level Up",
            Self::Streak3 => "3 Day Streak",
            Self::Streak7 => "7 Day Streak",
            Self::Streak30 => "30 Day Streak",
            Self::LessonComplete => "First Lesson Complete",
            Self::PerfectScore => "Perfect Score",
        }
    }
}

/// Streak-tier lookup table: exact streak value -> achievement kind.
///
/// The match is exact, not a threshold. A streak that jumps past a tier
/// value (e.g. a correction lands the streak on 4) does not retroactively
/// grant the skipped tier.
pub const STREAK_TIERS: [(i32, AchievementKind); 3] = [
    (3, AchievementKind::Streak3),
    (7, AchievementKind::Streak7),
    (30, AchievementKind::Streak30),
];

/// Look up the streak tier matching the exact streak value, if any.
pub fn streak_tier(streak_days: i32) -> Option<AchievementKind> {
    STREAK_TIERS
        .iter()
        .find(|(days, _)| *days == streak_days)
        .map(|(_, kind)| *kind)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_tier_exact_values() {
        assert_eq!(streak_tier(3), Some(AchievementKind::Streak3));
        assert_eq!(streak_tier(7), Some(AchievementKind::Streak7));
        assert_eq!(streak_tier(30), Some(AchievementKind::Streak30));
    }

    #[test]
    fn streak_tier_non_tier_values_grant_nothing() {
        assert_eq!(streak_tier(0), None);
        assert_eq!(streak_tier(1), None);
        assert_eq!(streak_tier(4), None);
        assert_eq!(streak_tier(8), None);
        assert_eq!(streak_tier(29), None);
        assert_eq!(streak_tier(31), None);
    }

    #[test]
    fn catalog_rewards() {
        assert_eq!(AchievementKind::LevelUp.xp_reward(), 200);
        assert_eq!(AchievementKind::Streak3.xp_reward(), 100);
        assert_eq!(AchievementKind::Streak7.xp_reward(), 300);
        assert_eq!(AchievementKind::Streak30.xp_reward(), 1000);
    }

    #[test]
    fn string_round_trip() {
        for kind in [
            AchievementKind::LevelUp,
            AchievementKind::Streak3,
            AchievementKind::Streak7,
            AchievementKind::Streak30,
            AchievementKind::LessonComplete,
            AchievementKind::PerfectScore,
        ] {
            assert_eq!(AchievementKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(AchievementKind::parse("STREAK_100"), None);
    }
}
