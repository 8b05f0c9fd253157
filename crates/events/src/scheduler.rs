//! Scheduled reminder emitter.
//!
//! [`ReminderScheduler`] runs as a background task, ticking hourly. At
//! each tick it finds the users whose preferred reminder hour matches the
//! current UTC hour and publishes daily-reminder, word-of-the-day, and
//! streak-alert events for them. The notification dispatcher downstream
//! turns those into persisted notifications and channel deliveries.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Timelike, Utc};
use lingo_db::repositories::{NotificationPreferenceRepo, WordOfTheDayRepo, XpAccountRepo};
use lingo_db::DbPool;
use tokio_util::sync::CancellationToken;

use crate::bus::{
    EventBus, LearningEvent, EVENT_DAILY_REMINDER, EVENT_STREAK_ALERT, EVENT_WORD_OF_DAY,
};

/// How often the scheduler wakes up to check for due reminders.
const TICK_INTERVAL: Duration = Duration::from_secs(3600);

/// Background service that emits reminder events at each user's hour.
pub struct ReminderScheduler {
    pool: DbPool,
    bus: Arc<EventBus>,
}

impl ReminderScheduler {
    /// Create a new scheduler publishing onto the given bus.
    pub fn new(pool: DbPool, bus: Arc<EventBus>) -> Self {
        Self { pool, bus }
    }

    /// Run the scheduler loop.
    ///
    /// Ticks hourly; the loop exits gracefully when the provided
    /// [`CancellationToken`] is cancelled.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(TICK_INTERVAL);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Reminder scheduler cancelled");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = self.emit_due_reminders().await {
                        tracing::error!(error = %e, "Failed to emit reminders");
                    }
                }
            }
        }
    }

    /// Emit reminder events for every user whose hour is now.
    async fn emit_due_reminders(&self) -> Result<(), sqlx::Error> {
        let now = Utc::now();
        let hour = now.hour() as i16;

        let due = NotificationPreferenceRepo::list_users_for_hour(&self.pool, hour).await?;
        if due.is_empty() {
            return Ok(());
        }

        let word = WordOfTheDayRepo::for_date(&self.pool, now.date_naive()).await?;

        for prefs in &due {
            self.bus
                .publish(LearningEvent::new(EVENT_DAILY_REMINDER, prefs.user_id));

            if let Some(word) = &word {
                self.bus.publish(
                    LearningEvent::new(EVENT_WORD_OF_DAY, prefs.user_id).with_payload(
                        serde_json::json!({
                            "word": word.word,
                            "translation": word.translation,
                            "example_sentence": word.example_sentence,
                        }),
                    ),
                );
            }

            // Only users with a live streak get the keep-it-going nudge.
            if let Some(account) = XpAccountRepo::find(&self.pool, prefs.user_id).await? {
                if account.streak_days > 0 {
                    self.bus.publish(
                        LearningEvent::new(EVENT_STREAK_ALERT, prefs.user_id).with_payload(
                            serde_json::json!({ "streak_days": account.streak_days }),
                        ),
                    );
                }
            }
        }

        tracing::info!(count = due.len(), hour, "Emitted scheduled reminders");
        Ok(())
    }
}
