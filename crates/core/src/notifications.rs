//! Notification types and channel routing rules.
//!
//! The dispatcher decides, per notification type and per user preference,
//! which delivery channels to use. The decision itself is pure and lives
//! here; actual sending is the events crate's job.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Notification types
// ---------------------------------------------------------------------------

/// Daily practice reminder.
pub const TYPE_DAILY_REMINDER: &str = "DAILY_REMINDER";
/// Word-of-the-day delivery.
pub const TYPE_WORD_OF_DAY: &str = "WORD_OF_DAY";
/// Periodic progress summary.
pub const TYPE_PROGRESS_UPDATE: &str = "PROGRESS_UPDATE";
/// Streak about to lapse, or streak milestone.
pub const TYPE_STREAK_ALERT: &str = "STREAK_ALERT";
/// Achievement unlocked.
pub const TYPE_ACHIEVEMENT: &str = "ACHIEVEMENT";
/// Fresh lesson recommendations available.
pub const TYPE_RECOMMENDATION: &str = "RECOMMENDATION";

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// Channel routing choice for one notification type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationChannel {
    Email,
    Push,
    Both,
}

impl NotificationChannel {
    /// Parse the stored string form; unknown values fall back to `Both`,
    /// matching the default routing for types with no override.
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "EMAIL" => Self::Email,
            "PUSH" => Self::Push,
            _ => Self::Both,
        }
    }
}

/// Which deliveries to actually perform for one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryPlan {
    pub email: bool,
    pub push: bool,
}

impl DeliveryPlan {
    /// True when no channel will be used.
    pub fn is_empty(self) -> bool {
        !self.email && !self.push
    }
}

/// Decide the delivery channels for a notification.
///
/// The per-type routing choice selects candidate channels; the user's
/// global per-channel switches then gate each candidate.
pub fn delivery_plan(
    routing: NotificationChannel,
    email_enabled: bool,
    push_enabled: bool,
) -> DeliveryPlan {
    DeliveryPlan {
        email: email_enabled
            && matches!(
                routing,
                NotificationChannel::Email | NotificationChannel::Both
            ),
        push: push_enabled
            && matches!(routing, NotificationChannel::Push | NotificationChannel::Both),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
